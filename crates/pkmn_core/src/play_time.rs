use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Played-time counter. Generation 4 keeps no frame count and always
/// reports zero frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    /// Sixtieths of a second.
    pub frames: u8,
}

impl PlayTime {
    pub fn validate(&self) -> Result<(), CoreError> {
        CoreError::check_index("minutes", usize::from(self.minutes), 60)?;
        CoreError::check_index("seconds", usize::from(self.seconds), 60)?;
        CoreError::check_index("frames", usize::from(self.frames), 60)
    }
}
