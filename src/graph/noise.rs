use crate::dsp::noise::NoiseBurst;
use crate::graph::node::SfxNode;

/// One-shot noise source. Plays its pre-rendered burst once and finishes.
pub struct NoiseNode {
    burst: NoiseBurst,
}

impl NoiseNode {
    /// A decaying white-noise burst of `seconds` length. The buffer is
    /// generated here, at construction, so the audio callback only copies.
    pub fn burst(sample_rate: f32, seconds: f32) -> Self {
        Self {
            burst: NoiseBurst::new(sample_rate, seconds),
        }
    }
}

impl SfxNode for NoiseNode {
    fn render_block(&mut self, out: &mut [f32], _sample_rate: f32) {
        self.burst.render(out);
    }

    fn is_finished(&self) -> bool {
        self.burst.is_finished()
    }
}
