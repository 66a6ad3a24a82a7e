use std::f32::consts::TAU;

use crate::dsp::curve::Curve;

/*
Sine Oscillator with Frequency Automation
=========================================

The only periodic source these recipes need is a sine - UI cues want pure,
unobtrusive tones, not harmonically rich waveforms. What they do need is
pitch movement: the click falls 800->400Hz, the hover rises 600->800Hz.

The oscillator is a phase accumulator. Each sample it reads its
instantaneous frequency from a Curve, advances the phase by

    phase += TAU * freq / sample_rate

and outputs sin(phase). Accumulating phase (rather than computing
sin(TAU * f * t)) keeps the waveform continuous while the frequency
moves - evaluating against absolute time would make a glide jump in
phase every sample and sound like noise.

Time for the frequency curve is the oscillator's own elapsed time since
construction, i.e. seconds after the trigger instant.
*/

pub struct SineOsc {
    freq: Curve,
    phase: f32,
    elapsed_samples: u64,
}

impl SineOsc {
    pub fn new(freq: Curve) -> Self {
        Self {
            freq,
            phase: 0.0,
            elapsed_samples: 0,
        }
    }

    /// Oscillator at a fixed pitch.
    pub fn fixed(hz: f32) -> Self {
        Self::new(Curve::constant(hz))
    }

    /// Advance one sample and return it.
    #[inline]
    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let t = self.elapsed_samples as f32 / sample_rate;
        let freq = self.freq.value_at(t);

        let out = self.phase.sin();
        self.phase += TAU * freq / sample_rate;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
        self.elapsed_samples += 1;

        out
    }

    /// Fill a block with oscillator output.
    pub fn render(&mut self, out: &mut [f32], sample_rate: f32) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(sample_rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sine_matches_closed_form() {
        let sample_rate = 48_000.0;
        let mut osc = SineOsc::fixed(440.0);

        let mut buffer = vec![0.0f32; 128];
        osc.render(&mut buffer, sample_rate);

        // sample n should be sin(2pi f n / sr)
        let n = 12;
        let expected = (TAU * 440.0 * n as f32 / sample_rate).sin();
        let actual = buffer[n];
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn glide_output_stays_continuous() {
        // 800 -> 400 exponential glide; a phase accumulator must not jump
        let sample_rate = 48_000.0;
        let freq = Curve::new(800.0).set_at(800.0, 0.0).exp_to(400.0, 0.05);
        let mut osc = SineOsc::new(freq);

        let mut buffer = vec![0.0f32; 4096];
        osc.render(&mut buffer, sample_rate);

        // Max per-sample step of a sine at 800Hz/48kHz is TAU*800/48000 ~= 0.105
        for pair in buffer.windows(2) {
            assert!(
                (pair[1] - pair[0]).abs() < 0.12,
                "discontinuity between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn glide_slows_zero_crossing_rate() {
        // Falling pitch should produce fewer zero crossings late in the sweep
        let sample_rate = 48_000.0;
        let freq = Curve::new(800.0).set_at(800.0, 0.0).exp_to(400.0, 0.05);
        let mut osc = SineOsc::new(freq);

        let block = (0.025 * sample_rate) as usize;
        let mut early = vec![0.0f32; block];
        let mut late = vec![0.0f32; block];
        osc.render(&mut early, sample_rate);
        osc.render(&mut late, sample_rate);

        let crossings = |buf: &[f32]| {
            buf.windows(2)
                .filter(|p| (p[0] >= 0.0) != (p[1] >= 0.0))
                .count()
        };
        assert!(
            crossings(&early) > crossings(&late),
            "early {} vs late {}",
            crossings(&early),
            crossings(&late)
        );
    }
}
