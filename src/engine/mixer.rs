use crate::engine::message::{MessageReceiver, SfxMessage};
use crate::engine::MAX_SFX_VOICES;
use crate::graph::SfxVoice;
use crate::MAX_BLOCK_SIZE;

/// Audio-callback-side voice pool.
///
/// Pops play requests from its inbox, renders every live voice into the
/// output block, and reclaims voices the moment they report finished.
/// Sounds triggered on the same tick each get their own slot and simply
/// overlap; there is no priority or ducking between them.
///
/// The pool is bounded at MAX_SFX_VOICES. UI cues are short, so hitting
/// the bound takes a pathological trigger rate; if it happens the oldest
/// voice is dropped, which with these recipes is also the quietest by
/// then. Everything here runs on the audio thread: no locks, no
/// allocation on the happy path (voice drops do free their graphs).
pub struct SfxMixer<R: MessageReceiver> {
    rx: R,
    voices: Vec<SfxVoice>,
    temp_buffer: Vec<f32>,
}

impl<R: MessageReceiver> SfxMixer<R> {
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            voices: Vec::with_capacity(MAX_SFX_VOICES),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Number of voices currently sounding.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Render one mono block: drain the inbox, mix, reclaim.
    pub fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        while let Some(SfxMessage::Play(voice)) = self.rx.pop() {
            if self.voices.len() == MAX_SFX_VOICES {
                self.voices.remove(0);
            }
            self.voices.push(voice);
        }

        out.fill(0.0);
        // Chunked so callers may pass blocks beyond MAX_BLOCK_SIZE
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            for voice in &mut self.voices {
                let frames = &mut self.temp_buffer[..chunk.len()];
                frames.fill(0.0);
                voice.render_block(frames, sample_rate);

                for (o, &s) in chunk.iter_mut().zip(frames.iter()) {
                    *o += s;
                }
            }
        }

        self.voices.retain(|v| !v.is_finished());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voices::{self, SoundKind};
    use std::collections::VecDeque;

    const SAMPLE_RATE: f32 = 48_000.0;

    fn inbox(kinds: &[SoundKind]) -> VecDeque<SfxMessage> {
        kinds
            .iter()
            .map(|&k| SfxMessage::Play(voices::build(k, k.default_volume(), SAMPLE_RATE)))
            .collect()
    }

    #[test]
    fn overlapping_triggers_each_get_a_voice() {
        let mut mixer = SfxMixer::new(inbox(&[SoundKind::Click, SoundKind::Whoosh]));

        let mut block = vec![0.0f32; 256];
        mixer.render_block(&mut block, SAMPLE_RATE);

        assert_eq!(mixer.active_voices(), 2);
        assert!(block.iter().any(|&s| s.abs() > 0.0));
    }

    #[test]
    fn finished_voices_are_reclaimed() {
        let mut mixer = SfxMixer::new(inbox(&[SoundKind::Click]));

        // 0.08s click at 48k = 3840 samples
        let mut block = vec![0.0f32; 1024];
        for _ in 0..5 {
            mixer.render_block(&mut block, SAMPLE_RATE);
        }
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn renders_blocks_larger_than_the_temp_buffer() {
        let mut mixer = SfxMixer::new(inbox(&[SoundKind::Success]));

        let mut block = vec![0.0f32; 4_800];
        mixer.render_block(&mut block, SAMPLE_RATE);

        assert!(block.iter().all(|&s| s.is_finite()));
        assert!(block.iter().any(|&s| s.abs() > 0.0));
    }

    #[test]
    fn empty_inbox_renders_silence() {
        let mut mixer = SfxMixer::new(VecDeque::new());
        let mut block = vec![1.0f32; 128];
        mixer.render_block(&mut block, SAMPLE_RATE);
        assert!(block.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn pool_bound_drops_the_oldest() {
        let kinds = [SoundKind::Ambient; MAX_SFX_VOICES + 2];
        let mut mixer = SfxMixer::new(inbox(&kinds));

        let mut block = vec![0.0f32; 64];
        mixer.render_block(&mut block, SAMPLE_RATE);
        assert_eq!(mixer.active_voices(), MAX_SFX_VOICES);
    }
}
