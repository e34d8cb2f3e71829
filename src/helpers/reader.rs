use crate::error::RustyAlloyError;
use std::fs::File;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum UnifiedReaderError {
    #[error("Remote data source '{0}' is not supported, download it first")]
    RemoteSourceError(String),

    #[error("Invalid file URL '{0}'")]
    FileUrlError(String),

    #[error("Empty data buffer for '{0}'")]
    EmptyBufferError(String),
}

/// A unified reader over a local workbook file or an in-memory buffer
pub(crate) enum UnifiedReader {
    /// Local file reader
    Local(BufReader<File>),
    /// Uploaded bytes
    Memory(Cursor<Vec<u8>>),
}

impl UnifiedReader {
    /// Opens a workbook from a local path or a `file://` URL
    ///
    /// # Arguments
    /// * `location` - Path or URL of the workbook
    pub(crate) fn open(location: &str) -> Result<UnifiedReader, RustyAlloyError> {
        let path = Self::local_path(location)?;
        let file = File::open(path)?;
        Ok(UnifiedReader::Local(BufReader::new(file)))
    }

    /// Wraps an in-memory workbook, e.g. an uploaded file
    pub(crate) fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<UnifiedReader, RustyAlloyError> {
        if bytes.is_empty() {
            Err(UnifiedReaderError::EmptyBufferError(name.to_owned()))?;
        }
        Ok(UnifiedReader::Memory(Cursor::new(bytes)))
    }

    /// Resolves a location to a local path.
    /// Plain paths pass through; `file://` URLs are converted; other schemes are rejected.
    pub(crate) fn local_path(location: &str) -> Result<PathBuf, RustyAlloyError> {
        match Url::parse(location) {
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map_err(|_| UnifiedReaderError::FileUrlError(location.to_owned()).into()),
            // Single letters are Windows drive prefixes such as "C:\data.xlsx"
            Ok(url) if url.scheme().len() > 1 => {
                Err(UnifiedReaderError::RemoteSourceError(location.to_owned()).into())
            }
            _ => Ok(PathBuf::from(location)),
        }
    }

    /// Reads the leading signature bytes and rewinds
    pub(crate) fn signature(&mut self) -> Result<[u8; 4], RustyAlloyError> {
        let mut magic = [0u8; 4];
        let mut filled = 0usize;
        while filled < magic.len() {
            let count = self.read(&mut magic[filled..])?;
            if count == 0 {
                break;
            }
            filled += count;
        }
        self.seek(SeekFrom::Start(0))?;
        Ok(magic)
    }
}

impl Read for UnifiedReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            UnifiedReader::Local(reader) => reader.read(buf),
            UnifiedReader::Memory(reader) => reader.read(buf),
        }
    }
}

impl Seek for UnifiedReader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        match self {
            UnifiedReader::Local(reader) => reader.seek(pos),
            UnifiedReader::Memory(reader) => reader.seek(pos),
        }
    }
}
