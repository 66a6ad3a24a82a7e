//! Click: the shortest, crispest cue.
//!
//! A sine that falls an octave (800 -> 400Hz) in 50ms while its gain
//! decays away. The falling pitch is what reads as "something was
//! pressed"; a static tone of the same length just sounds like a beep.

use crate::dsp::curve::Curve;
use crate::graph::{oscillator::OscNode, NodeExt, SfxVoice};
use crate::MIN_LEVEL;

const DURATION: f32 = 0.08;

pub fn click(volume: f32) -> SfxVoice {
    let freq = Curve::new(800.0).set_at(800.0, 0.0).exp_to(400.0, 0.05);
    let gain = Curve::new(volume)
        .set_at(volume, 0.0)
        .exp_to(MIN_LEVEL, DURATION);

    let node = OscNode::sine(freq).stop_at(DURATION).amplify(gain);
    SfxVoice::new(node, DURATION)
}
