// Purpose: everything that touches the audio device - the lazily created
// session context, the UI -> audio voice queue, and the callback-side mixer.

pub mod context;
pub mod message;
pub mod mixer;

pub use context::{ContextSlot, ContextState, OutputContext};
pub use message::{MessageReceiver, SfxMessage};
pub use mixer::SfxMixer;

/// Upper bound on simultaneously sounding voices.
pub const MAX_SFX_VOICES: usize = 16;

/// Capacity of the trigger queue. Larger than the voice pool so a burst
/// of triggers within one callback period doesn't drop on the queue side.
pub const SFX_QUEUE_CAPACITY: usize = 64;
