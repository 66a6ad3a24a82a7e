use std::f32::consts::TAU;

/*
| type     | passes          | used by                               |
| -------- | --------------- | ------------------------------------- |
| low-pass | below cutoff    | ambient (200Hz, removes any edge)     |
| band-pass| around cutoff   | whoosh (1k->3k sweep shapes the hiss) |

Topology-preserving-transform state-variable filter. Two integrator
memories, both band outputs computed per sample; the mode only selects
which one leaves the filter. The prewarped coefficient g is recomputed
per block, which is also where cutoff automation is applied - block-rate
cutoff movement is inaudible at the block sizes used here.

Resonance maps to the damping coefficient k = 2 - 2*resonance;
resonance 0.0 is the gentle, non-peaking response the recipes want.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    BandPass,
}

pub struct SVFilter {
    ic1eq: f32, // First integrator's memory
    ic2eq: f32, // Second integrator's memory

    cutoff_hz: f32,
    resonance: f32,
    mode: FilterMode,
}

impl SVFilter {
    pub fn new(mode: FilterMode, cutoff_hz: f32) -> Self {
        Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            cutoff_hz,
            resonance: 0.0,
            mode,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterMode::LowPass, cutoff_hz)
    }

    pub fn bandpass(cutoff_hz: f32) -> Self {
        Self::new(FilterMode::BandPass, cutoff_hz)
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = cutoff_hz.clamp(20.0, 20_000.0);
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance.clamp(0.0, 0.95);
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    #[inline]
    fn compute_g(&self, sample_rate: f32) -> f32 {
        (TAU * self.cutoff_hz / (2.0 * sample_rate)).tan()
    }

    /// Filter a block in place.
    pub fn render(&mut self, buffer: &mut [f32], sample_rate: f32) {
        let g = self.compute_g(sample_rate);
        let k = 2.0 - 2.0 * self.resonance;
        let h = 1.0 / (1.0 + g * (g + k));

        for sample in buffer.iter_mut() {
            let v3 = *sample - self.ic2eq;
            let v1 = h * (self.ic1eq + g * v3);
            let v2 = self.ic2eq + g * v1;

            self.ic1eq = 2.0 * v1 - self.ic1eq;
            self.ic2eq = 2.0 * v2 - self.ic2eq;

            *sample = match self.mode {
                FilterMode::LowPass => v2,
                FilterMode::BandPass => v1,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::SineOsc;

    fn peak_after_transient(buffer: &[f32]) -> f32 {
        let skip = buffer.len().min(32);
        buffer
            .get(skip..)
            .unwrap_or(buffer)
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn lowpass_passes_dc() {
        let mut filter = SVFilter::lowpass(500.0);
        let mut buffer = vec![1.0; 256];
        filter.render(&mut buffer, 48_000.0);
        assert!(buffer[255] > 0.99);
    }

    #[test]
    fn lowpass_attenuates_high_frequencies() {
        let sample_rate = 48_000.0;
        let mut filter = SVFilter::lowpass(200.0);

        // 2kHz tone, 10x above the ambient cutoff
        let mut osc = SineOsc::fixed(2_000.0);
        let mut buffer = vec![0.0f32; 512];
        osc.render(&mut buffer, sample_rate);
        filter.render(&mut buffer, sample_rate);

        let peak = peak_after_transient(&buffer);
        assert!(peak < 0.2, "expected attenuation, got peak {peak}");
    }

    #[test]
    fn bandpass_emphasizes_center_frequency() {
        let sample_rate = 48_000.0;
        let center = 1_000.0;

        let mut filter = SVFilter::bandpass(center);
        let mut osc = SineOsc::fixed(center);
        let mut on_buffer = vec![0.0f32; 512];
        osc.render(&mut on_buffer, sample_rate);
        filter.render(&mut on_buffer, sample_rate);
        let on_peak = peak_after_transient(&on_buffer);

        filter.reset();
        let mut osc = SineOsc::fixed(100.0);
        let mut off_buffer = vec![0.0f32; 512];
        osc.render(&mut off_buffer, sample_rate);
        filter.render(&mut off_buffer, sample_rate);
        let off_peak = peak_after_transient(&off_buffer);

        assert!(
            on_peak > off_peak * 2.0,
            "expected bandpass emphasis, on={on_peak}, off={off_peak}"
        );
    }

    #[test]
    fn resonance_boosts_the_center_frequency() {
        let sample_rate = 48_000.0;
        let cutoff = 1_000.0;

        let render_peak = |resonance: f32| {
            let mut filter = SVFilter::bandpass(cutoff);
            filter.set_resonance(resonance);
            let mut osc = SineOsc::fixed(cutoff);
            let mut buffer = vec![0.0f32; 1024];
            osc.render(&mut buffer, sample_rate);
            filter.render(&mut buffer, sample_rate);
            peak_after_transient(&buffer)
        };

        let flat = render_peak(0.0);
        let peaked = render_peak(0.7);
        assert!(
            peaked > flat * 1.2,
            "expected resonant boost, flat={flat}, peaked={peaked}"
        );
    }

    #[test]
    fn set_cutoff_clamps_to_audible_range() {
        let mut filter = SVFilter::lowpass(1_000.0);
        filter.set_cutoff(5.0);
        assert!((filter.cutoff() - 20.0).abs() < 0.1);
        filter.set_cutoff(90_000.0);
        assert!((filter.cutoff() - 20_000.0).abs() < 0.1);
    }
}
