use thiserror::Error;

/// The crate's single failure class: every variant is an I/O failure.
///
/// `ConfigError` covers reading the settings file, `ArchiveError` writing the
/// zip container, and `JpegEncodeError` writing the encoded page. Any of them
/// is fatal to the run; out-of-range numbers are never rejected.
#[derive(Debug, Error)]
pub enum CbzGenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("JPEG encode error: {0}")]
    JpegEncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Generates factory methods for [`CbzGenError`] variants that wrap a `String`.
macro_rules! error_constructors {
    ($(
        $(#[doc = $doc:expr])*
        $method:ident => $variant:ident
    ),* $(,)?) => {
        impl CbzGenError {
            $(
                $(#[doc = $doc])*
                pub fn $method(msg: impl Into<String>) -> Self {
                    Self::$variant(msg.into())
                }
            )*
        }
    };
}

error_constructors! {
    /// Create a configuration error.
    config => ConfigError,
    /// Create an archive error.
    archive => ArchiveError,
    /// Create a JPEG encode error.
    jpeg_encode => JpegEncodeError,
}

impl From<zip::result::ZipError> for CbzGenError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => Self::IoError(io),
            other => Self::ArchiveError(other.to_string()),
        }
    }
}

impl From<serde_yml::Error> for CbzGenError {
    fn from(e: serde_yml::Error) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<image::ImageError> for CbzGenError {
    fn from(e: image::ImageError) -> Self {
        Self::JpegEncodeError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CbzGenError>;
