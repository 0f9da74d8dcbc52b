//! Parameter definitions with physical units and documented semantics.
//!
//! All tunables live here with:
//! - Physical units (meters, degrees, seconds)
//! - Documented ranges and meanings
//! - Validation returning `OceanError::InvalidArgument`

mod ocean;
mod render;

// Re-export all types
pub use ocean::{PlaneParams, SurfaceParams, WaveSpectrum};
pub(crate) use ocean::interval_is_sampleable;
pub use render::{ExportConfig, FrameParams};
