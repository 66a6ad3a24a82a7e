use std::time::{Duration, Instant};

use crate::control::prefs::PreferenceStore;
use crate::engine::ContextSlot;
use crate::voices::{self, SoundKind};

/// Minimum spacing between accepted hover sounds. Pointer-enter events
/// arrive far faster than this when sweeping across a row of controls;
/// anything denser than 10 per second reads as crackle, not feedback.
pub const HOVER_THROTTLE: Duration = Duration::from_millis(100);

/// The synthesis seam behind the trigger controller.
///
/// The real implementation builds a voice and hands it to the audio
/// engine; tests substitute a recorder to observe exactly which sounds
/// the controller let through.
pub trait Synth {
    fn trigger(&mut self, kind: SoundKind, volume: f32);
}

/// Production synth: lazy context plus the voice queue.
///
/// The first trigger that gets here creates the audio context; a failed
/// creation latches and every later trigger no-ops. Either way nothing
/// propagates to the caller - total silence is the only failure symptom.
///
/// The context slot lives inside the synth rather than in process-wide
/// state: cpal streams are not `Send`, so a `static` slot cannot exist,
/// and the accessor that guards the at-most-once lifecycle is therefore
/// the one `SoundControl` owning this synth. Construct one controller
/// per process; a second `EngineSynth` would open a second stream.
pub struct EngineSynth {
    slot: ContextSlot,
}

impl EngineSynth {
    pub fn new() -> Self {
        Self {
            slot: ContextSlot::new(),
        }
    }
}

impl Default for EngineSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl Synth for EngineSynth {
    fn trigger(&mut self, kind: SoundKind, volume: f32) {
        if let Some(ctx) = self.slot.get_or_create() {
            let sample_rate = ctx.sample_rate();
            ctx.submit(voices::build(kind, volume, sample_rate));
        }
    }
}

/// The capability UI code consumes: the preference plus one callable per
/// sound kind. Passing `&mut dyn SoundCue` around (or [`NoopSound`] where
/// sound is unavailable) keeps call sites free of option-checking.
pub trait SoundCue {
    fn enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    /// Flip the preference. Plays one confirmation click only when turning
    /// sound ON - muting must not itself make noise.
    fn toggle(&mut self);

    fn play_click(&mut self);
    fn play_hover(&mut self);
    fn play_success(&mut self);
    fn play_whoosh(&mut self);
    fn play_ambient(&mut self);
}

/// Fallback implementation: reports disabled, plays nothing.
pub struct NoopSound;

impl SoundCue for NoopSound {
    fn enabled(&self) -> bool {
        false
    }
    fn set_enabled(&mut self, _enabled: bool) {}
    fn toggle(&mut self) {}
    fn play_click(&mut self) {}
    fn play_hover(&mut self) {}
    fn play_success(&mut self) {}
    fn play_whoosh(&mut self) {}
    fn play_ambient(&mut self) {}
}

/// The trigger controller: gates every playback request on the preference
/// and throttles hovers, then delegates to the synth with the kind's
/// default volume. Fire-and-forget; no call here ever blocks or fails.
pub struct SoundControl<S: Synth> {
    prefs: PreferenceStore,
    synth: S,
    last_hover: Option<Instant>,
}

impl SoundControl<EngineSynth> {
    /// Production controller: persisted preference, real audio engine.
    pub fn new() -> Self {
        Self::with_parts(PreferenceStore::load(), EngineSynth::new())
    }
}

impl Default for SoundControl<EngineSynth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Synth> SoundControl<S> {
    /// Assemble from explicit parts (tests inject a recording synth and a
    /// preference store pointed at a scratch path).
    pub fn with_parts(prefs: PreferenceStore, synth: S) -> Self {
        Self {
            prefs,
            synth,
            last_hover: None,
        }
    }

    /// The gate every unthrottled kind goes through.
    fn play(&mut self, kind: SoundKind) {
        if !self.prefs.enabled() {
            return;
        }
        self.synth.trigger(kind, kind.default_volume());
    }
}

impl<S: Synth> SoundCue for SoundControl<S> {
    fn enabled(&self) -> bool {
        self.prefs.enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.prefs.set_enabled(enabled);
    }

    fn toggle(&mut self) {
        let enabled = !self.prefs.enabled();
        self.prefs.set_enabled(enabled);
        if enabled {
            self.play(SoundKind::Click);
        }
    }

    fn play_click(&mut self) {
        self.play(SoundKind::Click);
    }

    /// Hover is the one throttled kind. A request inside the window is
    /// dropped WITHOUT updating the timestamp, so a steady stream of
    /// hovers still plays every 100ms instead of never.
    fn play_hover(&mut self) {
        if !self.prefs.enabled() {
            return;
        }

        let now = Instant::now();
        if let Some(last) = self.last_hover {
            if now.duration_since(last) < HOVER_THROTTLE {
                return;
            }
        }
        self.last_hover = Some(now);

        self.synth
            .trigger(SoundKind::Hover, SoundKind::Hover.default_volume());
    }

    fn play_success(&mut self) {
        self.play(SoundKind::Success);
    }

    fn play_whoosh(&mut self) {
        self.play(SoundKind::Whoosh);
    }

    fn play_ambient(&mut self) {
        self.play(SoundKind::Ambient);
    }
}
