//! Builder-style fixtures for exercising the adapter without a live game
//! runtime or database.

use crate::entity::{EntityError, VehicleEntity};
use crate::slots::EXTRA_SLOTS;
use crate::store::{StoreError, VehicleDocumentStore};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory vehicle entity. Slots read back 0 and extras read back `false`
/// unless configured otherwise; slots marked unsupported fail every mod
/// read and write, the way a model without that slot does.
pub struct MockVehicle {
    id: u32,
    mod_kit: u16,
    mods: HashMap<u8, i32>,
    unsupported_slots: HashSet<u8>,
    extras: [bool; EXTRA_SLOTS as usize],
    wheels: HashMap<u8, i32>,
    synced_meta: HashMap<String, f32>,
    properties: HashMap<String, Value>,
    rejected_properties: HashSet<String>,
}

impl MockVehicle {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            mod_kit: 0,
            mods: HashMap::new(),
            unsupported_slots: HashSet::new(),
            extras: [false; EXTRA_SLOTS as usize],
            wheels: HashMap::new(),
            synced_meta: HashMap::new(),
            properties: HashMap::new(),
            rejected_properties: HashSet::new(),
        }
    }

    pub fn with_mod_kit(mut self, kit: u16) -> Self {
        self.mod_kit = kit;
        self
    }

    pub fn with_mod(mut self, slot: u8, value: i32) -> Self {
        self.mods.insert(slot, value);
        self
    }

    pub fn with_unsupported_slot(mut self, slot: u8) -> Self {
        self.unsupported_slots.insert(slot);
        self
    }

    pub fn with_extra(mut self, id: u8, flag: bool) -> Self {
        self.extras[id as usize] = flag;
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: f32) -> Self {
        self.synced_meta.insert(key.into(), value);
        self
    }

    pub fn with_rejected_property(mut self, key: impl Into<String>) -> Self {
        self.rejected_properties.insert(key.into());
        self
    }

    /// Value assigned through `set_property`, if any.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Value written through `set_wheels`, if any.
    pub fn wheel_value(&self, wheel: u8) -> Option<i32> {
        self.wheels.get(&wheel).copied()
    }
}

impl VehicleEntity for MockVehicle {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_property(&mut self, key: &str, value: Value) -> Result<(), EntityError> {
        if self.rejected_properties.contains(key) {
            return Err(EntityError::UnknownProperty(key.to_string()));
        }
        self.properties.insert(key.to_string(), value);
        Ok(())
    }

    fn extra(&self, id: u8) -> bool {
        self.extras[id as usize]
    }

    fn set_extra(&mut self, id: u8, on: bool) {
        self.extras[id as usize] = on;
    }

    fn mod_kit(&self) -> u16 {
        self.mod_kit
    }

    fn set_mod_kit(&mut self, kit: u16) {
        self.mod_kit = kit;
    }

    fn mod_value(&self, slot: u8) -> Result<i32, EntityError> {
        if self.unsupported_slots.contains(&slot) {
            return Err(EntityError::UnsupportedSlot { slot });
        }
        Ok(self.mods.get(&slot).copied().unwrap_or(0))
    }

    fn set_mod(&mut self, slot: u8, value: i32) -> Result<(), EntityError> {
        if self.unsupported_slots.contains(&slot) {
            return Err(EntityError::UnsupportedSlot { slot });
        }
        self.mods.insert(slot, value);
        Ok(())
    }

    fn set_wheels(&mut self, wheel: u8, value: i32) -> Result<(), EntityError> {
        self.wheels.insert(wheel, value);
        Ok(())
    }

    fn synced_meta(&self, key: &str) -> Result<f32, EntityError> {
        self.synced_meta
            .get(key)
            .copied()
            .ok_or_else(|| EntityError::MissingMeta(key.to_string()))
    }

    fn set_synced_meta(&mut self, key: &str, value: f32) -> Result<(), EntityError> {
        self.synced_meta.insert(key.to_string(), value);
        Ok(())
    }
}

/// In-memory document store keyed by vehicle id. Writes can be made to fail
/// to exercise persistence error propagation.
pub struct MemoryStore {
    docs: Mutex<HashMap<u32, Value>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn with_document(self, vehicle_id: u32, doc: Value) -> Self {
        self.docs.lock().unwrap().insert(vehicle_id, doc);
        self
    }

    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The whole document for a vehicle, if one exists.
    pub fn document(&self, vehicle_id: u32) -> Option<Value> {
        self.docs.lock().unwrap().get(&vehicle_id).cloned()
    }

    /// One named field of a vehicle's document.
    pub fn field(&self, vehicle_id: u32, field: &str) -> Option<Value> {
        self.document(vehicle_id)?.get(field).cloned()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleDocumentStore for MemoryStore {
    fn get(&self, vehicle_id: u32) -> Option<Value> {
        self.docs.lock().unwrap().get(&vehicle_id).cloned()
    }

    async fn set(&self, vehicle_id: u32, field: &str, value: Value) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Rejected("simulated write failure".to_string()));
        }

        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .entry(vehicle_id)
            .or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(map) = doc {
            map.insert(field.to_string(), value);
        }
        Ok(())
    }
}
