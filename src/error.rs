use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an `image` crate failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageErrorKind {
    Io,
    Decoding,
    Encoding,
    Parameter,
    Limits,
    Unsupported,
}

impl From<&image::ImageError> for ImageErrorKind {
    fn from(e: &image::ImageError) -> Self {
        match e {
            image::ImageError::Decoding(_) => Self::Decoding,
            image::ImageError::Encoding(_) => Self::Encoding,
            image::ImageError::Unsupported(_) => Self::Unsupported,
            image::ImageError::Parameter(_) => Self::Parameter,
            image::ImageError::Limits(_) => Self::Limits,
            image::ImageError::IoError(_) => Self::Io,
            #[allow(unreachable_patterns)]
            _ => Self::Unsupported,
        }
    }
}

#[derive(Debug, Error)]
pub enum PictureError {
    #[error("pixel ({row}, {col}) is outside a picture of height {height} and width {width}")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("expected a {}x{} picture, got {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        /// (height, width)
        expected: (usize, usize),
        /// (height, width)
        found: (usize, usize),
    },
    #[error("could not load {} ({kind:?}): {source}", .path.display())]
    Load {
        path: PathBuf,
        kind: ImageErrorKind,
        #[source]
        source: image::ImageError,
    },
    #[error("could not save {} ({kind:?}): {source}", .path.display())]
    Save {
        path: PathBuf,
        kind: ImageErrorKind,
        #[source]
        source: image::ImageError,
    },
    #[error("raw buffer of {len} bytes does not hold a {width}x{height} RGB raster")]
    InvalidBuffer {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PictureError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Load {
            path: path.into(),
            kind: (&source).into(),
            source,
        }
    }

    pub(crate) fn save(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Save {
            path: path.into(),
            kind: (&source).into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PictureError>;
