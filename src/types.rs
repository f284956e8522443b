use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One indexed modification slot on a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleMod {
    pub id: u8,
    pub value: i32,
}

/// One of the 14 wheel slots. Every slot is backed by the same underlying
/// mod index, so a freshly read list carries 14 copies of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelMod {
    pub id: u8,
    pub value: i32,
}

/// One of the 6 stance adjustments (camber, height, rim radius, track width,
/// tyre radius, tyre width), stored as named synchronized metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StanceMod {
    pub id: u8,
    pub value: f32,
}

/// A toggleable visual component slot. `state` is the logical on/off value,
/// which is the negation of the raw engine flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleExtra {
    pub id: u8,
    pub state: bool,
}

/// Full tuning record as it appears in a persisted vehicle document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleTuning {
    /// Cannot exceed the modkit count of the vehicle model.
    pub modkit: u16,
    pub mods: Vec<VehicleMod>,
    pub stance: Vec<StanceMod>,
    pub wheels: Vec<WheelMod>,
}

/// Partial tuning record. Absent sections are left untouched on apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningPatch {
    pub modkit: Option<u16>,
    pub mods: Option<Vec<VehicleMod>>,
    pub stance: Option<Vec<StanceMod>>,
    pub wheels: Option<Vec<WheelMod>>,
}

impl From<VehicleTuning> for TuningPatch {
    fn from(tuning: VehicleTuning) -> Self {
        Self {
            modkit: Some(tuning.modkit),
            mods: Some(tuning.mods),
            stance: Some(tuning.stance),
            wheels: Some(tuning.wheels),
        }
    }
}

/// Arbitrary named vehicle properties to assign in bulk, typically pulled
/// straight from a database document. Values are not validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatePatch(pub HashMap<String, Value>);

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
