//! Whoosh: the transition sweep.
//!
//! A 200ms decaying noise burst pushed through a band-pass whose center
//! sweeps 1k -> 3kHz in the first 100ms. The rising center frequency over
//! falling noise energy is what makes it move "past" the listener rather
//! than just hiss. Peaks at 0.5x the requested volume.

use crate::dsp::curve::Curve;
use crate::graph::{filter::FilterNode, noise::NoiseNode, NodeExt, SfxVoice};
use crate::MIN_LEVEL;

const DURATION: f32 = 0.20;

pub fn whoosh(volume: f32, sample_rate: f32) -> SfxVoice {
    let sweep = Curve::new(1_000.0)
        .set_at(1_000.0, 0.0)
        .exp_to(3_000.0, 0.1);
    let gain = Curve::new(0.0)
        .linear_to(0.5 * volume, 0.05)
        .exp_to(MIN_LEVEL, DURATION);

    let node = NoiseNode::burst(sample_rate, DURATION)
        .through(FilterNode::bandpass(sweep))
        .amplify(gain);
    SfxVoice::new(node, DURATION)
}
