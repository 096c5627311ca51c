use std::path::{Path, PathBuf};

/// Convenience result type used across renderfig.
pub type FigureResult<T> = Result<T, FigureError>;

/// Stable, payload-free classification of a [`FigureError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Metadata sidecar is absent.
    MissingMetadata,
    /// Metadata sidecar lacks required fields or holds non-numeric values.
    MalformedMetadata,
    /// Image file is absent.
    MissingImage,
    /// The decoder rejected the image content.
    UnsupportedFormat,
    /// An input file exists but could not be read.
    Read,
    /// Reference and method images disagree on dimensions.
    DimensionMismatch,
    /// A crop box reaches outside the image.
    CropOutOfBounds,
    /// No crop list could be resolved for a scene.
    NoCropConfiguration,
    /// The output document could not be written.
    Write,
    /// Invalid configuration values.
    Config,
    /// Anything else (wrapped lower-level failures).
    Other,
}

/// Top-level error taxonomy used by the figure pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FigureError {
    /// Metadata sidecar file does not exist.
    #[error("missing metadata: '{}'", path.display())]
    MissingMetadata {
        /// Expected sidecar location.
        path: PathBuf,
    },

    /// Metadata sidecar exists but cannot be interpreted.
    #[error("malformed metadata: '{}': {reason}", path.display())]
    MalformedMetadata {
        /// Sidecar location.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Image file does not exist.
    #[error("missing image: '{}'", path.display())]
    MissingImage {
        /// Expected image location.
        path: PathBuf,
    },

    /// Image exists but the decoder rejected it.
    #[error("unsupported format: '{}': {reason}", path.display())]
    UnsupportedFormat {
        /// Image location.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Input file exists but reading it failed.
    #[error("read error: '{}': {source}", path.display())]
    Read {
        /// File location.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An image does not share the reference image's dimensions.
    #[error(
        "dimension mismatch: '{}' is {actual_w}x{actual_h}, reference is {expected_w}x{expected_h}",
        path.display()
    )]
    DimensionMismatch {
        /// Offending image.
        path: PathBuf,
        /// Reference width.
        expected_w: u32,
        /// Reference height.
        expected_h: u32,
        /// Offending width.
        actual_w: u32,
        /// Offending height.
        actual_h: u32,
    },

    /// Crop box does not fit inside the scene's images.
    #[error(
        "crop out of bounds: box #{index} (top {top}, left {left}, {width}x{height}) exceeds {image_w}x{image_h}"
    )]
    CropOutOfBounds {
        /// Position of the box in the scene's crop list.
        index: usize,
        /// Box top offset.
        top: u32,
        /// Box left offset.
        left: u32,
        /// Box width.
        width: u32,
        /// Box height.
        height: u32,
        /// Image width.
        image_w: u32,
        /// Image height.
        image_h: u32,
    },

    /// Scene has no crop override and no default crop list is configured.
    #[error("no crop configuration for scene '{scene}'")]
    NoCropConfiguration {
        /// Scene identifier.
        scene: String,
    },

    /// Output document could not be written.
    #[error("write error: '{}': {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Error raised while processing a particular scene.
    #[error("scene '{scene}': {source}")]
    Scene {
        /// Scene identifier.
        scene: String,
        /// The failure.
        #[source]
        source: Box<FigureError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FigureError {
    /// Build a [`FigureError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FigureError::MalformedMetadata`] value.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Classify a failed read of an input file: absent files become `missing`, anything
    /// else is a [`FigureError::Read`].
    pub(crate) fn from_read(
        path: &Path,
        err: std::io::Error,
        missing: impl FnOnce(PathBuf) -> Self,
    ) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            missing(path.to_path_buf())
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// Attach the scene identifier to an error, unless it already carries one.
    pub fn in_scene(self, scene: &str) -> Self {
        match self {
            Self::Scene { .. } => self,
            other => Self::Scene {
                scene: scene.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Classification of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMetadata { .. } => ErrorKind::MissingMetadata,
            Self::MalformedMetadata { .. } => ErrorKind::MalformedMetadata,
            Self::MissingImage { .. } => ErrorKind::MissingImage,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Read { .. } => ErrorKind::Read,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::CropOutOfBounds { .. } => ErrorKind::CropOutOfBounds,
            Self::NoCropConfiguration { .. } => ErrorKind::NoCropConfiguration,
            Self::Write { .. } => ErrorKind::Write,
            Self::Config(_) => ErrorKind::Config,
            Self::Scene { source, .. } => source.kind(),
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
