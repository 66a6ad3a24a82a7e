/// Result alias that carries the crate's [`SfxError`] type.
pub type Result<T> = std::result::Result<T, SfxError>;

/// Errors raised while opening the audio output context.
///
/// These never reach trigger call sites: context construction failures are
/// caught by the engine, logged once, and turn every later playback request
/// into a no-op for the rest of the session.
#[derive(Debug, thiserror::Error)]
pub enum SfxError {
    #[error("no default audio output device available")]
    NoOutputDevice,
    #[error("failed to query default output config: {0}")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build audio output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start audio output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}
