pub mod checksum;
pub mod core_api;
pub mod crypt;
pub mod data;
mod error;
pub mod gba;
pub mod gender;
pub mod layout;
pub mod nds;
mod play_time;
pub mod slot;
pub mod stat;
pub mod text;

pub use error::{CoreError, CoreErrorCode};
pub use play_time::PlayTime;

use core_api::{Engine, Session};

/// Opens a save image of either generation, auto-detecting the release.
pub fn read_save(bytes: &[u8]) -> Result<Session, CoreError> {
    Engine::new().open_bytes(bytes, None)
}

/// The committed image for `save`: edits land in the inactive slot and the
/// previously active slot is preserved.
pub fn write_save(save: &Session) -> Result<Vec<u8>, CoreError> {
    save.to_bytes_committed()
}
