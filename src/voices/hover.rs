//! Hover: a barely-there rising tone.
//!
//! 600 -> 800Hz over 100ms with a soft 30ms attack into an exponential
//! decay. Peaks at 0.3x the requested volume - hovers fire constantly, so
//! the recipe itself keeps them quieter than a click at the same setting.

use crate::dsp::curve::Curve;
use crate::graph::{oscillator::OscNode, NodeExt, SfxVoice};
use crate::MIN_LEVEL;

const DURATION: f32 = 0.12;

pub fn hover(volume: f32) -> SfxVoice {
    let freq = Curve::new(600.0).set_at(600.0, 0.0).exp_to(800.0, 0.1);
    let gain = Curve::new(0.0)
        .linear_to(0.3 * volume, 0.03)
        .exp_to(MIN_LEVEL, DURATION);

    let node = OscNode::sine(freq).stop_at(DURATION).amplify(gain);
    SfxVoice::new(node, DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_ramps_from_silence() {
        let sample_rate = 48_000.0;
        let mut voice = hover(0.5);

        // First millisecond should still be very quiet
        let mut head = vec![0.0f32; 48];
        voice.render_block(&mut head, sample_rate);
        let head_peak = head.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(head_peak < 0.02, "attack leaked, peak {head_peak}");

        // By the end of the 30ms attack it should approach 0.3 * volume
        let mut body = vec![0.0f32; (0.03 * sample_rate) as usize];
        voice.render_block(&mut body, sample_rate);
        let body_peak = body.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        assert!(
            body_peak > 0.1,
            "attack never reached level, peak {body_peak}"
        );
    }
}
