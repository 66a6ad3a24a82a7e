use crate::dsp::{
    curve::Curve,
    filter::{FilterMode, SVFilter},
};
use crate::graph::node::SfxNode;

/// Filter stage with an automated cutoff.
///
/// The cutoff curve is sampled once per block at the block's start time -
/// the whoosh sweep moves 1k->3k over 100ms, slow enough that block-rate
/// updates are inaudible.
pub struct FilterNode {
    filter: SVFilter,
    cutoff: Curve,
    elapsed_samples: u64,
}

impl FilterNode {
    pub fn lowpass(cutoff: Curve) -> Self {
        Self::new(FilterMode::LowPass, cutoff)
    }

    pub fn bandpass(cutoff: Curve) -> Self {
        Self::new(FilterMode::BandPass, cutoff)
    }

    fn new(mode: FilterMode, cutoff: Curve) -> Self {
        let filter = SVFilter::new(mode, cutoff.value_at(0.0));
        Self {
            filter,
            cutoff,
            elapsed_samples: 0,
        }
    }
}

impl SfxNode for FilterNode {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        let t = self.elapsed_samples as f32 / sample_rate;
        self.filter.set_cutoff(self.cutoff.value_at(t));
        self.filter.render(out, sample_rate);
        self.elapsed_samples += out.len() as u64;
    }

    // Pass-through: whether the sound is over is the source's call.
}
