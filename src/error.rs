//! Error types shared by the wave generator, tessellator and exporters.

/// Errors surfaced by the ocean core.
#[derive(thiserror::Error, Debug)]
pub enum OceanError {
    /// A parameter violated a precondition (count above capacity, zero extent, ...)
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Heightmap encoding failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Wrapper for standard I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl OceanError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for precondition failures
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, OceanError>;
