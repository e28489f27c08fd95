use crate::error::CoreError;
use crate::gender::Gender;
use crate::layout::{read_u16, write_u16};
use crate::play_time::PlayTime;
use crate::text::gba as text;

use super::types::{
    TIME_FRAMES, TIME_HOURS, TIME_MINUTES, TIME_SECONDS, TRAINER_GENDER, TRAINER_ID,
    TRAINER_NAME, TRAINER_SECRET_ID,
};

/// Trainer card fields over section 0.
#[derive(Debug)]
pub struct Trainer<B> {
    buf: B,
}

impl<B: AsRef<[u8]>> Trainer<B> {
    pub(crate) fn new(buf: B) -> Self {
        Self { buf }
    }

    fn bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    pub fn name(&self) -> String {
        text::decode_string(&self.bytes()[TRAINER_NAME.start..TRAINER_NAME.end])
    }

    pub fn raw_name(&self) -> &[u8] {
        &self.bytes()[TRAINER_NAME.start..TRAINER_NAME.end]
    }

    pub fn gender(&self) -> Gender {
        Gender::from_raw(self.bytes()[TRAINER_GENDER])
    }

    pub fn id(&self) -> u16 {
        read_u16(self.bytes(), TRAINER_ID)
    }

    pub fn secret_id(&self) -> u16 {
        read_u16(self.bytes(), TRAINER_SECRET_ID)
    }

    /// Secret id in the high half, as records store it.
    pub fn full_id(&self) -> u32 {
        u32::from(self.id()) | (u32::from(self.secret_id()) << 16)
    }

    pub fn play_time(&self) -> PlayTime {
        let b = self.bytes();
        PlayTime {
            hours: read_u16(b, TIME_HOURS),
            minutes: b[TIME_MINUTES],
            seconds: b[TIME_SECONDS],
            frames: b[TIME_FRAMES],
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Trainer<B> {
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    pub fn set_name(&mut self, name: &str) {
        let encoded = text::encode_str(name, TRAINER_NAME.len());
        self.bytes_mut()[TRAINER_NAME.start..TRAINER_NAME.end].copy_from_slice(&encoded);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.bytes_mut()[TRAINER_GENDER] = gender.raw();
    }

    pub fn set_ids(&mut self, id: u16, secret_id: u16) {
        write_u16(self.bytes_mut(), TRAINER_ID, id);
        write_u16(self.bytes_mut(), TRAINER_SECRET_ID, secret_id);
    }

    pub fn set_play_time(&mut self, time: PlayTime) -> Result<(), CoreError> {
        time.validate()?;
        let b = self.bytes_mut();
        write_u16(b, TIME_HOURS, time.hours);
        b[TIME_MINUTES] = time.minutes;
        b[TIME_SECONDS] = time.seconds;
        b[TIME_FRAMES] = time.frames;
        Ok(())
    }
}
