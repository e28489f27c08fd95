use crate::error::CoreError;
use crate::gender::Gender;
use crate::layout::{read_u16, read_u32, write_u16, write_u32};
use crate::play_time::PlayTime;
use crate::text::nds as text;

use super::types::{
    MONEY_MAX, TIME_HOURS, TIME_MINUTES, TIME_SECONDS, TRAINER_BADGES, TRAINER_GENDER,
    TRAINER_ID, TRAINER_LANGUAGE, TRAINER_MONEY, TRAINER_NAME_LEN, TRAINER_SECRET_ID,
};

const NAME_BYTES: usize = TRAINER_NAME_LEN * 2;

/// Trainer record inside the general block.
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
        text::decode_string(&self.bytes()[..NAME_BYTES])
    }

    pub fn id(&self) -> u16 {
        read_u16(self.bytes(), TRAINER_ID)
    }

    pub fn secret_id(&self) -> u16 {
        read_u16(self.bytes(), TRAINER_SECRET_ID)
    }

    pub fn money(&self) -> u32 {
        read_u32(self.bytes(), TRAINER_MONEY)
    }

    pub fn gender(&self) -> Gender {
        Gender::from_raw(self.bytes()[TRAINER_GENDER])
    }

    pub fn language(&self) -> u8 {
        self.bytes()[TRAINER_LANGUAGE]
    }

    /// One bit per badge.
    pub fn badges(&self) -> u8 {
        self.bytes()[TRAINER_BADGES]
    }

    pub fn play_time(&self) -> PlayTime {
        let b = self.bytes();
        PlayTime {
            hours: read_u16(b, TIME_HOURS),
            minutes: b[TIME_MINUTES],
            seconds: b[TIME_SECONDS],
            frames: 0,
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Trainer<B> {
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }

    pub fn set_name(&mut self, name: &str) {
        let encoded = text::encode_str(name, TRAINER_NAME_LEN);
        self.bytes_mut()[..NAME_BYTES].copy_from_slice(&encoded);
    }

    pub fn set_ids(&mut self, id: u16, secret_id: u16) {
        write_u16(self.bytes_mut(), TRAINER_ID, id);
        write_u16(self.bytes_mut(), TRAINER_SECRET_ID, secret_id);
    }

    pub fn set_money(&mut self, money: u32) -> Result<(), CoreError> {
        CoreError::check_index("money", money as usize, MONEY_MAX as usize + 1)?;
        write_u32(self.bytes_mut(), TRAINER_MONEY, money);
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.bytes_mut()[TRAINER_GENDER] = gender.raw();
    }

    pub fn set_badges(&mut self, badges: u8) {
        self.bytes_mut()[TRAINER_BADGES] = badges;
    }

    pub fn set_play_time(&mut self, time: PlayTime) -> Result<(), CoreError> {
        time.validate()?;
        let b = self.bytes_mut();
        write_u16(b, TIME_HOURS, time.hours);
        b[TIME_MINUTES] = time.minutes;
        b[TIME_SECONDS] = time.seconds;
        Ok(())
    }
}
