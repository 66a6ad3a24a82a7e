use crate::dsp::{curve::Curve, oscillator::SineOsc};
use crate::graph::node::SfxNode;

/// Sine source node with start/stop scheduling.
///
/// Renders silence before `start_at`, runs its oscillator between the two
/// marks, and reports finished after `stop_at`. The success chime uses the
/// start offset for its delayed second tone; every source uses `stop_at`
/// to bound its scheduled lifetime exactly to the recipe duration.
///
/// The frequency curve runs on the node's local clock: t = 0 is the moment
/// the oscillator starts, not the trigger instant. The recipes only glide
/// oscillators that start at the trigger instant, so the two coincide.
pub struct OscNode {
    osc: SineOsc,
    start_at: f32,
    stop_at: f32,
    elapsed_samples: u64,
    finished: bool,
}

impl OscNode {
    pub fn sine(freq: Curve) -> Self {
        Self {
            osc: SineOsc::new(freq),
            start_at: 0.0,
            stop_at: f32::INFINITY,
            elapsed_samples: 0,
            finished: false,
        }
    }

    /// Delay the oscillator's onset to `t` seconds after the trigger.
    pub fn start_at(mut self, t: f32) -> Self {
        self.start_at = t;
        self
    }

    /// Stop (and finish) the oscillator at `t` seconds after the trigger.
    pub fn stop_at(mut self, t: f32) -> Self {
        self.stop_at = t;
        self
    }
}

impl SfxNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        for sample in out.iter_mut() {
            let t = self.elapsed_samples as f32 / sample_rate;
            *sample = if t >= self.start_at && t < self.stop_at {
                self.osc.next_sample(sample_rate)
            } else {
                0.0
            };
            self.elapsed_samples += 1;
        }

        let end = self.elapsed_samples as f32 / sample_rate;
        if end >= self.stop_at {
            self.finished = true;
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn silent_before_start_time() {
        let mut node = OscNode::sine(Curve::constant(659.0))
            .start_at(0.1)
            .stop_at(0.3);

        // Everything strictly before 0.1s must be zero
        let before = (0.1 * SAMPLE_RATE) as usize;
        let mut buffer = vec![0.0f32; before];
        node.render_block(&mut buffer, SAMPLE_RATE);
        assert!(buffer.iter().all(|&s| s == 0.0), "leaked before onset");

        // And right after the onset it must produce signal
        let mut after = vec![0.0f32; 256];
        node.render_block(&mut after, SAMPLE_RATE);
        assert!(after.iter().any(|&s| s.abs() > 0.01), "no signal at onset");
    }

    #[test]
    fn finishes_at_stop_time() {
        let mut node = OscNode::sine(Curve::constant(800.0)).stop_at(0.08);

        let mut rendered = 0usize;
        let mut buffer = vec![0.0f32; 16];
        while !node.is_finished() {
            node.render_block(&mut buffer, SAMPLE_RATE);
            rendered += buffer.len();
            assert!(rendered < SAMPLE_RATE as usize, "never finished");
        }

        let expected = (0.08 * SAMPLE_RATE) as usize;
        assert!(
            rendered >= expected && rendered <= expected + buffer.len(),
            "finished after {rendered} samples, expected ~{expected}"
        );
    }

    #[test]
    fn unbounded_oscillator_never_finishes() {
        let mut node = OscNode::sine(Curve::constant(120.0));
        let mut buffer = vec![0.0f32; 512];
        node.render_block(&mut buffer, SAMPLE_RATE);
        assert!(!node.is_finished());
    }
}
