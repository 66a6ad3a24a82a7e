//! Ambient: a two-second low swell.
//!
//! A 120Hz sine under a 200Hz low-pass, fading in over half a second and
//! back out by two. Peaks at 0.05x the requested volume - it is meant to
//! be felt more than heard. The longest recipe by an order of magnitude,
//! and the reason the mixer keeps sounds independent: clicks and hovers
//! keep landing on top of a running swell.

use crate::dsp::curve::Curve;
use crate::graph::{filter::FilterNode, oscillator::OscNode, NodeExt, SfxVoice};

const DURATION: f32 = 2.0;

pub fn ambient(volume: f32) -> SfxVoice {
    let gain = Curve::new(0.0)
        .linear_to(0.05 * volume, 0.5)
        .linear_to(0.0, DURATION);

    let node = OscNode::sine(Curve::constant(120.0))
        .stop_at(DURATION)
        .through(FilterNode::lowpass(Curve::constant(200.0)))
        .amplify(gain);
    SfxVoice::new(node, DURATION)
}
