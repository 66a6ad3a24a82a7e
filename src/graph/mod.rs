pub mod amplify;
pub mod extensions;
pub mod filter;
pub mod mix;
pub mod node;
pub mod noise;
pub mod oscillator;
pub mod through;

pub use extensions::NodeExt;
pub use node::SfxNode;

/// A complete, self-terminating sound: one boxed graph plus its nominal
/// duration. Built on the UI thread by a recipe, shipped by value to the
/// audio thread, rendered until `is_finished`, then dropped. No handle to
/// it survives anywhere else - nothing outlives its sound.
pub struct SfxVoice {
    root: Box<dyn SfxNode>,
    duration_secs: f32,
}

impl SfxVoice {
    pub fn new(root: impl SfxNode + 'static, duration_secs: f32) -> Self {
        Self {
            root: Box::new(root),
            duration_secs,
        }
    }

    /// Nominal scheduled length of the sound in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    pub fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        self.root.render_block(out, sample_rate);
    }

    pub fn is_finished(&self) -> bool {
        self.root.is_finished()
    }
}
