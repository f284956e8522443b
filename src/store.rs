use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Errors surfaced by the external document store.
///
/// This is the only error class the adapter propagates to callers; every
/// entity-level failure is handled at the call site.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("document store rejected write: {0}")]
    Rejected(String),
}

/// External document store holding one persisted document per vehicle.
///
/// Lookup is synchronous; writes are asynchronous and settle per the store's
/// own contract. The adapter issues at most one write per `apply_mods` call
/// and provides no retry, timeout, or cancellation on top.
pub trait VehicleDocumentStore {
    /// Fetch the persisted document for a vehicle, if one exists.
    /// Temporary vehicles have no document.
    fn get(&self, vehicle_id: u32) -> Option<Value>;

    /// Persist one named field of the vehicle's document.
    fn set(
        &self,
        vehicle_id: u32,
        field: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), StoreError>>;
}
