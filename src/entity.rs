use serde_json::Value;
use thiserror::Error;

/// Failures reported by the host runtime for a single property access.
///
/// These are per-slot, per-field conditions; most call sites treat them as
/// "this field does not apply to this vehicle model" and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("mod slot {slot} is not supported by this vehicle model")]
    UnsupportedSlot { slot: u8 },
    #[error("unknown vehicle property '{0}'")]
    UnknownProperty(String),
    #[error("synced meta field '{0}' is not set")]
    MissingMeta(String),
    #[error("host runtime error: {0}")]
    Runtime(String),
}

/// One live vehicle entity, owned and streamed by the host game runtime.
///
/// The adapter never stores these; it reads and mutates them in place and
/// leaves lifecycle entirely to the host. Implementations bind directly to
/// the engine's vehicle API.
pub trait VehicleEntity {
    /// Stable handle used to look the vehicle up in the document store.
    fn id(&self) -> u32;

    /// Assign an arbitrary named property. No type checking is performed;
    /// the host rejects keys it does not recognize.
    fn set_property(&mut self, key: &str, value: Value) -> Result<(), EntityError>;

    /// Raw engine extra flag. Note this is the inverse of the logical
    /// on/off state exposed through [`VehicleExtra`](crate::types::VehicleExtra).
    fn extra(&self, id: u8) -> bool;
    fn set_extra(&mut self, id: u8, on: bool);

    /// Modification-kit index selecting which mod variants are valid.
    fn mod_kit(&self) -> u16;
    fn set_mod_kit(&mut self, kit: u16);

    fn mod_value(&self, slot: u8) -> Result<i32, EntityError>;
    fn set_mod(&mut self, slot: u8, value: i32) -> Result<(), EntityError>;

    fn set_wheels(&mut self, wheel: u8, value: i32) -> Result<(), EntityError>;

    /// Named synchronized metadata, replicated to observers by the host.
    /// Used as ad-hoc storage for the stance fields.
    fn synced_meta(&self, key: &str) -> Result<f32, EntityError>;
    fn set_synced_meta(&mut self, key: &str, value: f32) -> Result<(), EntityError>;
}
