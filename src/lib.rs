pub mod control; // Trigger controller, preference store, capability trait
pub mod dsp; // Low-level blocks: curves, oscillator, noise, filter
pub mod engine; // Audio output context and realtime voice mixer
pub mod error;
pub mod graph; // Disposable per-sound node graphs
pub mod voices; // One fixed recipe per sound kind

pub use error::{Result, SfxError};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Floor for exponential ramps. An exponential curve can never reach zero,
/// so ramp targets and start values are clamped to this level; it sits
/// roughly 60 dB below full scale, well under audibility for UI cues.
pub(crate) const MIN_LEVEL: f32 = 0.001;
