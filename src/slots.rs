//! Static slot tables and ranges for the vehicle modification surface.
//!
//! All id ↔ field mappings live here as data so the adapter loops stay
//! table-driven and the ranges can be tested exhaustively.

use crate::entity::EntityError;

/// Indexed mod slots scanned by `get_mods`.
pub const MOD_SLOTS: u8 = 67;

/// Mod slots scanned by `get_tuning`. Wider than [`MOD_SLOTS`]; both bounds
/// are load-bearing for records already persisted, so neither is folded
/// into the other.
pub const TUNING_SCAN_SLOTS: u8 = 70;

/// Fixed wheel slot count. All slots alias [`WHEEL_SOURCE_SLOT`].
pub const WHEEL_SLOTS: u8 = 14;

/// The one real mod slot behind every wheel entry.
pub const WHEEL_SOURCE_SLOT: u8 = 23;

/// Toggleable extra slots.
pub const EXTRA_SLOTS: u8 = 15;

/// Stance adjustment slots.
pub const STANCE_SLOTS: u8 = 6;

/// Ties a stance id to the synchronized-metadata key it is stored under.
/// The key names match the persisted documents already in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StanceField {
    pub id: u8,
    pub meta_key: &'static str,
}

pub const STANCE_FIELDS: [StanceField; STANCE_SLOTS as usize] = [
    StanceField { id: 0, meta_key: "wheelModCamber" },
    StanceField { id: 1, meta_key: "wheelModHeight" },
    StanceField { id: 2, meta_key: "wheelModRimRadius" },
    StanceField { id: 3, meta_key: "wheelModTrackWidth" },
    StanceField { id: 4, meta_key: "wheelModTyreRadius" },
    StanceField { id: 5, meta_key: "wheelModTyreWidth" },
];

/// Look up the stance descriptor for an id. Ids outside the fixed range
/// have no descriptor and are ignored by every caller.
pub fn stance_field(id: u8) -> Option<&'static StanceField> {
    STANCE_FIELDS.iter().find(|field| field.id == id)
}

/// Outcome of reading one indexed mod slot.
///
/// A skipped slot is an explicit, inspectable result rather than a silently
/// dropped entry; `get_mods` is the filtered view over a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Read(i32),
    Skipped(EntityError),
}

impl SlotOutcome {
    pub fn value(&self) -> Option<i32> {
        match self {
            SlotOutcome::Read(value) => Some(*value),
            SlotOutcome::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotScan {
    pub slot: u8,
    pub outcome: SlotOutcome,
}
