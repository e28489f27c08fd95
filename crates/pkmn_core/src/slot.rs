//! Redundant save slot selection shared by both generations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    Primary,
    Secondary,
}

impl SlotId {
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Which copy an image is opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotChoice {
    #[default]
    Active,
    Backup,
}

/// Validation result for one candidate slot. `problem` holds the first reason
/// the slot was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub id: SlotId,
    pub counter: u32,
    pub valid: bool,
    pub problem: Option<String>,
}

impl SlotStatus {
    pub fn valid(id: SlotId, counter: u32) -> Self {
        Self {
            id,
            counter,
            valid: true,
            problem: None,
        }
    }

    pub fn invalid(id: SlotId, counter: u32, problem: impl Into<String>) -> Self {
        Self {
            id,
            counter,
            valid: false,
            problem: Some(problem.into()),
        }
    }
}

/// Picks the valid slot with the highest counter.
///
/// Equal counters on two valid slots cannot come out of a normal save
/// sequence and are rejected rather than guessed at.
pub fn select_active(slots: &[SlotStatus]) -> Result<SlotId, CoreError> {
    for slot in slots.iter().filter(|s| !s.valid) {
        log::warn!(
            "{} slot rejected: {}",
            slot.id.as_str(),
            slot.problem.as_deref().unwrap_or("invalid")
        );
    }

    let mut valid = slots.iter().filter(|s| s.valid);
    let Some(mut best) = valid.next() else {
        return Err(CoreError::corrupt("no save slot passed validation"));
    };
    let mut tied = false;
    for slot in valid {
        if slot.counter > best.counter {
            best = slot;
            tied = false;
        } else if slot.counter == best.counter {
            tied = true;
        }
    }
    if tied {
        return Err(CoreError::corrupt(format!(
            "valid slots share save counter {}",
            best.counter
        )));
    }

    log::debug!("active slot {} (counter {})", best.id.as_str(), best.counter);
    Ok(best.id)
}

/// Resolves a slot choice against the active slot. The backup must itself be
/// valid.
pub fn resolve_choice(
    slots: &[SlotStatus],
    choice: SlotChoice,
) -> Result<SlotId, CoreError> {
    let active = select_active(slots)?;
    match choice {
        SlotChoice::Active => Ok(active),
        SlotChoice::Backup => {
            let backup = active.other();
            if slots.iter().any(|s| s.id == backup && s.valid) {
                Ok(backup)
            } else {
                Err(CoreError::corrupt("backup slot is not valid"))
            }
        }
    }
}
