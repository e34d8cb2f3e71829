//! Command-line shell for the aluminum alloy advisor.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusty_alloy::{Advisor, Criteria, DataSource, QUICK_QUERIES};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "rusty-alloy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Handbook workbook: local path or file:// URL
    #[arg(short, long, global = true, env = "RUSTY_ALLOY_DATA", default_value = "data/temp_data.xlsx")]
    data: String,

    /// Only load sheets matching this glob pattern (repeatable)
    #[arg(short, long = "sheet", global = true)]
    sheets: Vec<String>,

    /// Maximum data rows read per sheet
    #[arg(long, global = true)]
    rows_limit: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer one question
    Ask {
        /// Question text, e.g. "T6 と T651 の違い"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Answer questions read from standard input, one per line
    Repl,
    /// List the loaded sheets
    Sheets,
    /// List alloy names found in the workbook
    Alloys,
    /// Print example questions
    Examples,
}

fn load_advisor(args: &Args) -> Result<Advisor> {
    let criteria = Criteria::default()
        .with_sheet_patterns(&args.sheets)
        .context("Invalid --sheet pattern")?
        .with_rows_limit(args.rows_limit);
    let mut advisor = Advisor::with_criteria(criteria);
    advisor
        .load(&DataSource::path(&args.data))
        .with_context(|| format!("Failed to load handbook '{}'", args.data))?;
    Ok(advisor)
}

fn run_repl(advisor: &Advisor) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim();
        if matches!(query, "exit" | "quit") {
            break;
        }
        if !query.is_empty() {
            writeln!(stdout, "{}\n", advisor.process_query(query))?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &args.command {
        Some(Command::Examples) => {
            for query in QUICK_QUERIES {
                println!("{query}");
            }
        }
        Some(Command::Ask { query }) => {
            let advisor = load_advisor(&args)?;
            println!("{}", advisor.process_query(&query.join(" ")));
        }
        Some(Command::Sheets) => {
            let advisor = load_advisor(&args)?;
            for sheet in advisor.sheet_summaries() {
                println!("{}\t{} rows\t{} columns", sheet.name, sheet.rows, sheet.columns);
            }
        }
        Some(Command::Alloys) => {
            let advisor = load_advisor(&args)?;
            if let Some(index) = advisor.index() {
                for (name, entries) in index.catalog().iter() {
                    let sheets: Vec<&str> = entries.iter().map(|entry| entry.sheet.as_str()).collect();
                    println!("{name}\t{}", sheets.join(", "));
                }
            }
        }
        Some(Command::Repl) | None => {
            let advisor = load_advisor(&args)?;
            run_repl(&advisor)?;
        }
    }
    Ok(())
}
