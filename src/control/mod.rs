// Purpose: the public surface UI code talks to - trigger gating,
// throttling, and the persisted sound preference.

pub mod prefs;
pub mod trigger;

pub use prefs::PreferenceStore;
pub use trigger::{EngineSynth, NoopSound, SoundControl, SoundCue, Synth, HOVER_THROTTLE};
