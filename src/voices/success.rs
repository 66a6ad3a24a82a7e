//! Success: a two-note ascending chime.
//!
//! C5 (523Hz) at the trigger, E5 (659Hz) coming in 100ms later as the
//! first note decays - a major third, the smallest interval that reads
//! as unambiguously positive. Both tones share one decaying gain stage,
//! exactly as if wired to a single gain node.

use crate::dsp::curve::Curve;
use crate::graph::{oscillator::OscNode, NodeExt, SfxVoice};
use crate::MIN_LEVEL;

const DURATION: f32 = 0.30;

/// Offset of the second tone's onset from the trigger instant.
pub const SECOND_ONSET: f32 = 0.10;

const FIRST_TONE_HZ: f32 = 523.0; // C5
const SECOND_TONE_HZ: f32 = 659.0; // E5

pub fn success(volume: f32) -> SfxVoice {
    let first = OscNode::sine(Curve::constant(FIRST_TONE_HZ)).stop_at(0.15);
    let second = OscNode::sine(Curve::constant(SECOND_TONE_HZ))
        .start_at(SECOND_ONSET)
        .stop_at(DURATION);

    let gain = Curve::new(volume)
        .set_at(volume, 0.0)
        .exp_to(MIN_LEVEL, DURATION);

    let node = first.mix(second).amplify(gain);
    SfxVoice::new(node, DURATION)
}
