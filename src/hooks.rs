//! Per-operation replacement table.
//!
//! A host application can swap out any single adapter operation by
//! registering a closure here and passing the table to
//! [`TuningAdapter`](crate::adapter::TuningAdapter) at construction. A
//! registered hook runs instead of the built-in logic and its result is
//! returned unchanged; internal callers go through the same dispatch, so a
//! replaced operation is observed everywhere. Setting a hook twice keeps
//! the last closure.

use crate::entity::{EntityError, VehicleEntity};
use crate::store::StoreError;
use crate::types::{StanceMod, StatePatch, TuningPatch, VehicleExtra, VehicleMod, VehicleTuning, WheelMod};
use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

pub type ApplyStateFn =
    Box<dyn Fn(&mut dyn VehicleEntity, &StatePatch) -> Result<(), EntityError>>;
pub type GetExtrasFn = Box<dyn Fn(&dyn VehicleEntity) -> Vec<VehicleExtra>>;
pub type SetExtrasFn = Box<dyn Fn(&mut dyn VehicleEntity, &[VehicleExtra])>;
pub type ApplyTuningFn =
    Box<dyn Fn(&mut dyn VehicleEntity, Option<&TuningPatch>) -> Result<(), EntityError>>;
pub type GetTuningFn = Box<dyn Fn(&dyn VehicleEntity) -> Result<VehicleTuning, EntityError>>;
pub type GetModsFn = Box<dyn Fn(&dyn VehicleEntity) -> Vec<VehicleMod>>;
pub type GetWheelsFn = Box<dyn Fn(&dyn VehicleEntity) -> Vec<WheelMod>>;
pub type GetStanceFn = Box<dyn Fn(&dyn VehicleEntity) -> Vec<StanceMod>>;
pub type ApplyModsFn = Box<
    dyn for<'a> Fn(
        &'a mut dyn VehicleEntity,
        u16,
        &'a [VehicleMod],
        &'a [StanceMod],
        &'a [WheelMod],
    ) -> BoxFuture<'a, Result<(), StoreError>>,
>;

/// Optional replacement per adapter operation. Empty by default.
#[derive(Default)]
pub struct TuningHooks {
    pub apply_state: Option<ApplyStateFn>,
    pub get_extras: Option<GetExtrasFn>,
    pub set_extras: Option<SetExtrasFn>,
    pub apply_tuning: Option<ApplyTuningFn>,
    pub get_tuning: Option<GetTuningFn>,
    pub get_mods: Option<GetModsFn>,
    pub get_wheels: Option<GetWheelsFn>,
    pub get_stance: Option<GetStanceFn>,
    pub apply_mods: Option<ApplyModsFn>,
}

impl TuningHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apply_state(
        mut self,
        f: impl Fn(&mut dyn VehicleEntity, &StatePatch) -> Result<(), EntityError> + 'static,
    ) -> Self {
        self.apply_state = Some(Box::new(f));
        self
    }

    pub fn with_get_extras(
        mut self,
        f: impl Fn(&dyn VehicleEntity) -> Vec<VehicleExtra> + 'static,
    ) -> Self {
        self.get_extras = Some(Box::new(f));
        self
    }

    pub fn with_set_extras(
        mut self,
        f: impl Fn(&mut dyn VehicleEntity, &[VehicleExtra]) + 'static,
    ) -> Self {
        self.set_extras = Some(Box::new(f));
        self
    }

    pub fn with_apply_tuning(
        mut self,
        f: impl Fn(&mut dyn VehicleEntity, Option<&TuningPatch>) -> Result<(), EntityError> + 'static,
    ) -> Self {
        self.apply_tuning = Some(Box::new(f));
        self
    }

    pub fn with_get_tuning(
        mut self,
        f: impl Fn(&dyn VehicleEntity) -> Result<VehicleTuning, EntityError> + 'static,
    ) -> Self {
        self.get_tuning = Some(Box::new(f));
        self
    }

    pub fn with_get_mods(
        mut self,
        f: impl Fn(&dyn VehicleEntity) -> Vec<VehicleMod> + 'static,
    ) -> Self {
        self.get_mods = Some(Box::new(f));
        self
    }

    pub fn with_get_wheels(
        mut self,
        f: impl Fn(&dyn VehicleEntity) -> Vec<WheelMod> + 'static,
    ) -> Self {
        self.get_wheels = Some(Box::new(f));
        self
    }

    pub fn with_get_stance(
        mut self,
        f: impl Fn(&dyn VehicleEntity) -> Vec<StanceMod> + 'static,
    ) -> Self {
        self.get_stance = Some(Box::new(f));
        self
    }

    pub fn with_apply_mods(
        mut self,
        f: impl for<'a> Fn(
                &'a mut dyn VehicleEntity,
                u16,
                &'a [VehicleMod],
                &'a [StanceMod],
                &'a [WheelMod],
            ) -> BoxFuture<'a, Result<(), StoreError>>
            + 'static,
    ) -> Self {
        self.apply_mods = Some(Box::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_registration_wins() {
        let hooks = TuningHooks::new()
            .with_get_mods(|_| vec![VehicleMod { id: 0, value: 1 }])
            .with_get_mods(|_| vec![VehicleMod { id: 0, value: 2 }]);

        let vehicle = crate::testing::MockVehicle::new(1);
        let mods = hooks.get_mods.as_ref().unwrap()(&vehicle);
        assert_eq!(mods, vec![VehicleMod { id: 0, value: 2 }]);
    }

    #[test]
    fn test_table_starts_empty() {
        let hooks = TuningHooks::new();
        assert!(hooks.get_mods.is_none());
        assert!(hooks.apply_mods.is_none());
    }
}
