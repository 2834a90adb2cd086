//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Spectral representation used throughout the renderer.
pub type Spectrum = RGBSpectrum;
