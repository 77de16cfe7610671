//! Audio settings: user-configurable preferences carried between screens.

use derive_new::new;
use tracing::instrument;

/// Loudest master volume, in percent.
pub const MAX_VOLUME: u8 = 100;

/// Master volume used until the player changes it.
pub const DEFAULT_VOLUME: u8 = 25;

/// Volume change per adjustment.
pub const VOLUME_STEP: u8 = 5;

/// Master volume and background-music preference.
///
/// Defaults to 25 % volume with music on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct AudioSettings {
    /// Master volume in percent, `0..=MAX_VOLUME`.
    pub volume: u8,
    /// Whether background music plays during gameplay.
    pub background_music: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME, true)
    }
}

impl AudioSettings {
    /// One step louder, saturating at [`MAX_VOLUME`].
    #[instrument]
    pub fn louder(self) -> Self {
        Self {
            volume: self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME),
            ..self
        }
    }

    /// One step quieter, saturating at zero.
    #[instrument]
    pub fn quieter(self) -> Self {
        Self {
            volume: self.volume.saturating_sub(VOLUME_STEP),
            ..self
        }
    }

    /// Flips the background-music preference.
    #[instrument]
    pub fn toggle_music(self) -> Self {
        Self {
            background_music: !self.background_music,
            ..self
        }
    }

    /// Volume as a gain in `0.0..=1.0`.
    pub fn gain(self) -> f32 {
        f32::from(self.volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
    }
}
