use crate::dsp::curve::Curve;
use crate::graph::node::SfxNode;

/*
Gain Stage
==========

Multiplies a signal by a time-stamped gain envelope. This is where the
attack/decay shape of every recipe lives: the signal node decides WHAT
plays, the gain curve decides HOW LOUD it is at each instant.

The curve is evaluated per sample on the node's elapsed clock, so linear
attacks and exponential decays land exactly on their scheduled times.
Lifetime is the signal's: when the source has stopped, the gain stage is
finished too, whatever the curve would still do.
*/

pub struct Amplify<N> {
    pub signal: N,
    gain: Curve,
    elapsed_samples: u64,
}

impl<N> Amplify<N> {
    pub fn new(signal: N, gain: Curve) -> Self {
        Self {
            signal,
            gain,
            elapsed_samples: 0,
        }
    }
}

impl<N: SfxNode> SfxNode for Amplify<N> {
    fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        self.signal.render_block(out, sample_rate);

        for sample in out.iter_mut() {
            let t = self.elapsed_samples as f32 / sample_rate;
            *sample *= self.gain.value_at(t);
            self.elapsed_samples += 1;
        }
    }

    fn is_finished(&self) -> bool {
        self.signal.is_finished()
    }
}
