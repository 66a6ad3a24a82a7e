/*
Shaped Noise Burst
==================

The whoosh source is not an oscillator but a one-shot buffer of white
noise whose amplitude decays exponentially across its length:

    sample[i] = white() * exp(-i / (len * 0.3))

The burst is generated once at voice construction - on the UI thread,
never in the audio callback - then played front to back exactly once.
The buffer length is round(sample_rate * seconds); downstream filtering
and gain shaping happen in the graph, not here.
*/

/// A pre-rendered, exponentially decaying white-noise buffer.
pub struct NoiseBurst {
    samples: Vec<f32>,
    position: usize,
}

/// Fraction of the buffer length that sets the decay time constant.
const DECAY_FRACTION: f32 = 0.3;

impl NoiseBurst {
    pub fn new(sample_rate: f32, seconds: f32) -> Self {
        let len = (sample_rate * seconds).round() as usize;
        let tau = len as f32 * DECAY_FRACTION;

        let mut rng = fastrand::Rng::new();
        let samples = (0..len)
            .map(|i| {
                let white = rng.f32() * 2.0 - 1.0;
                white * (-(i as f32) / tau).exp()
            })
            .collect();

        Self {
            samples,
            position: 0,
        }
    }

    /// Number of samples in the burst.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// True once the whole buffer has been played.
    pub fn is_finished(&self) -> bool {
        self.position >= self.samples.len()
    }

    /// Copy the next block of the burst into `out`, zero-filling past the end.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.position < self.samples.len() {
                let s = self.samples[self.position];
                self.position += 1;
                s
            } else {
                0.0
            };
        }
    }
}
