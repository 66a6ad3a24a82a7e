use std::time::Instant;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use crate::engine::message::SfxMessage;
use crate::engine::mixer::SfxMixer;
use crate::engine::SFX_QUEUE_CAPACITY;
use crate::graph::SfxVoice;
use crate::{Result, SfxError, MAX_BLOCK_SIZE};

/*
The Audio Context
=================

One output context serves the whole session. It is never constructed
eagerly - the first accepted trigger creates it, so the stream only
exists once the user has actually interacted - and once it exists it is
reused until the process exits. If construction fails (headless CI, no
output device, a denied audio server) the slot latches Unavailable and
every later trigger is a silent no-op; construction is attempted exactly
once per session either way.

The context owns the cpal stream and the producing end of the voice
queue. The consuming end lives inside the stream callback, wrapped in an
SfxMixer. Nothing else ever touches the stream.
*/

/// Lifecycle state of the output context.
///
/// `Suspended` and `Closed` exist for platforms whose audio sessions can
/// be interrupted; this crate never suspends or closes a context itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Running,
    Suspended,
    Closed,
}

/// The session-long audio output: cpal stream plus the voice queue inlet.
pub struct OutputContext {
    tx: Producer<SfxMessage>,
    sample_rate: f32,
    created_at: Instant,
    state: ContextState,
    // Keeps the stream alive; playback stops when this drops
    _stream: cpal::Stream,
}

impl OutputContext {
    /// Open the default output device and start the mixer stream.
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(SfxError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, rx) = RingBuffer::<SfxMessage>::new(SFX_QUEUE_CAPACITY);
        let mut mixer = SfxMixer::new(rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    mixer.render_block(block, sample_rate);

                    // Mono mix to all output channels
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| tracing::error!(%err, "audio stream error"),
            None,
        )?;
        stream.play()?;

        tracing::debug!(sample_rate, channels, "audio output context opened");

        Ok(Self {
            tx,
            sample_rate,
            created_at: Instant::now(),
            state: ContextState::Running,
            _stream: stream,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Hand a voice to the audio thread. Fire-and-forget: a full queue
    /// drops the sound, which for UI feedback is the right failure mode.
    pub fn submit(&mut self, voice: SfxVoice) {
        if self.tx.push(SfxMessage::Play(voice)).is_err() {
            tracing::debug!("sfx queue full, dropping sound");
        }
    }
}

/// Lazily-created, at-most-once slot for the session's context.
pub enum ContextSlot {
    Untried,
    Ready(OutputContext),
    Unavailable,
}

impl ContextSlot {
    pub fn new() -> Self {
        ContextSlot::Untried
    }

    /// The context, creating it on the first call. After a failed attempt
    /// this always returns None - no retry within a session.
    pub fn get_or_create(&mut self) -> Option<&mut OutputContext> {
        if let ContextSlot::Untried = self {
            *self = match OutputContext::open() {
                Ok(ctx) => ContextSlot::Ready(ctx),
                Err(err) => {
                    tracing::warn!(%err, "audio unavailable, sounds disabled for this session");
                    ContextSlot::Unavailable
                }
            };
        }

        match self {
            ContextSlot::Ready(ctx) => Some(ctx),
            _ => None,
        }
    }
}

impl Default for ContextSlot {
    fn default() -> Self {
        Self::new()
    }
}
