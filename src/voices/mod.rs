//! The five sound recipes, one per kind.
//!
//! Each recipe builds a disposable node graph with a fully time-stamped
//! envelope and a hard scheduled end. Times are seconds after the trigger
//! instant; every gain value is scaled by the caller-supplied volume.
//!
//! ```ignore
//! use pling_sfx::voices::{self, SoundKind};
//!
//! let voice = voices::build(SoundKind::Click, 0.08, 48_000.0);
//! ```

mod ambient;
mod click;
mod hover;
mod success;
mod whoosh;

pub use ambient::ambient;
pub use click::click;
pub use hover::hover;
pub use success::success;
pub use whoosh::whoosh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::SfxVoice;

/// The closed set of UI sounds. Each kind maps to exactly one synthesis
/// recipe; there is no way to play anything else through this crate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Click,
    Hover,
    Success,
    Whoosh,
    Ambient,
}

impl SoundKind {
    pub const ALL: [SoundKind; 5] = [
        SoundKind::Click,
        SoundKind::Hover,
        SoundKind::Success,
        SoundKind::Whoosh,
        SoundKind::Ambient,
    ];

    /// Default loudness used by the trigger controller. Deliberately small:
    /// UI feedback should sit far under any content audio.
    pub fn default_volume(self) -> f32 {
        match self {
            SoundKind::Click => 0.08,
            SoundKind::Hover => 0.04,
            SoundKind::Success => 0.10,
            SoundKind::Whoosh => 0.06,
            SoundKind::Ambient => 0.03,
        }
    }

    /// Nominal scheduled duration of the recipe.
    pub fn duration_secs(self) -> f32 {
        match self {
            SoundKind::Click => 0.08,
            SoundKind::Hover => 0.12,
            SoundKind::Success => 0.30,
            SoundKind::Whoosh => 0.20,
            SoundKind::Ambient => 2.0,
        }
    }
}

/// Realize a kind into a ready-to-play voice.
///
/// `volume` is not validated against [0, 1]; callers own their values and
/// this sits on the trigger hot path.
pub fn build(kind: SoundKind, volume: f32, sample_rate: f32) -> SfxVoice {
    match kind {
        SoundKind::Click => click(volume),
        SoundKind::Hover => hover(volume),
        SoundKind::Success => success(volume),
        SoundKind::Whoosh => whoosh(volume, sample_rate),
        SoundKind::Ambient => ambient(volume),
    }
}
