//! # Vehicle Tuning Adapter
//!
//! Property-mapping layer between a persisted vehicle document and a live
//! game-engine vehicle entity's mutable state: mods, extras, wheels, stance,
//! and the modification kit.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────────┐
//! │ VehicleEntity│◀───▶│ TuningAdapter │────▶│ DocumentStore   │
//! │ (host engine)│     │ (stateless)   │     │ (async persist) │
//! └──────────────┘     └───────┬───────┘     └─────────────────┘
//!                              │
//!                      ┌───────▼───────┐
//!                      │  TuningHooks  │
//!                      │ (per-op swap) │
//!                      └───────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TuningAdapter`] | Every get/apply operation over a vehicle |
//! | [`VehicleEntity`] | Trait bound to the host runtime's vehicle API |
//! | [`VehicleDocumentStore`] | Trait over the external document store |
//! | [`VehicleTuning`] / [`TuningPatch`] | Full and partial tuning records |
//! | [`TuningHooks`] | Per-operation replacement table, injected at build |
//!
//! ## Error policy
//!
//! Per-slot entity failures are logged and treated as "does not apply to
//! this model": dropped from reads, ignored on best-effort writes. The only
//! error surfaced by [`TuningAdapter::apply_mods`] is a failed document
//! store write.

pub mod adapter;
pub mod config;
pub mod entity;
pub mod hooks;
pub mod slots;
pub mod store;
pub mod testing;
pub mod types;

pub use adapter::TuningAdapter;
pub use config::TuningConfig;
pub use entity::{EntityError, VehicleEntity};
pub use hooks::{BoxFuture, TuningHooks};
pub use slots::{SlotOutcome, SlotScan, StanceField, STANCE_FIELDS};
pub use store::{StoreError, VehicleDocumentStore};
pub use types::{
    StanceMod, StatePatch, TuningPatch, VehicleExtra, VehicleMod, VehicleTuning, WheelMod,
};
