use std::rc::Rc;
use yew::Reducible;

use super::estimate::{EstimateResult, compute};
use super::fuel::FuelType;

/// In-memory state of the calculator form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    /// Raw text of the weekly car kilometers field
    pub car_km: String,

    /// Raw text of the monthly electricity (kWh) field
    pub electricity_kwh: String,

    pub fuel_type: FuelType,

    /// Present once the form has been computed since mount or the last reset
    pub result: Option<EstimateResult>,
}

/// User interactions that change the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetCarKm(String),
    SetElectricity(String),
    SelectFuel(FuelType),
    Compute,
    Reset,
}

impl FormState {
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Estimates emissions from the current inputs without touching the state
    pub fn estimate(&self) -> EstimateResult {
        compute(&self.car_km, &self.electricity_kwh, self.fuel_type)
    }

    /// Returns the state after `action`.
    ///
    /// Editing inputs keeps any previous result until the next compute.
    pub fn apply(&self, action: FormAction) -> Self {
        match action {
            FormAction::SetCarKm(car_km) => Self {
                car_km,
                ..self.clone()
            },
            FormAction::SetElectricity(electricity_kwh) => Self {
                electricity_kwh,
                ..self.clone()
            },
            FormAction::SelectFuel(fuel_type) => Self {
                fuel_type,
                ..self.clone()
            },
            FormAction::Compute => Self {
                result: Some(self.estimate()),
                ..self.clone()
            },
            FormAction::Reset => Self::default(),
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
