use yew::prelude::*;

use crate::config::Config;
use crate::models::form::{FormAction, FormState};
use crate::models::fuel::FuelType;

/// Handle returned by `use_estimator` hook
#[derive(Clone, PartialEq)]
pub struct EstimatorHandle {
    pub state: FormState,
    pub set_car_km: Callback<String>,
    pub set_electricity: Callback<String>,
    pub select_fuel: Callback<FuelType>,
    pub compute: Callback<()>,
    pub reset: Callback<()>,
}

/// Custom hook holding the calculator form for the lifetime of the screen
#[hook]
pub fn use_estimator() -> EstimatorHandle {
    let form = use_reducer(FormState::default);

    let set_car_km = {
        let form = form.clone();
        Callback::from(move |text: String| form.dispatch(FormAction::SetCarKm(text)))
    };

    let set_electricity = {
        let form = form.clone();
        Callback::from(move |text: String| form.dispatch(FormAction::SetElectricity(text)))
    };

    let select_fuel = {
        let form = form.clone();
        Callback::from(move |fuel: FuelType| form.dispatch(FormAction::SelectFuel(fuel)))
    };

    // Log from the current inputs; the dispatched state is only visible next render
    let compute = {
        let form = form.clone();
        Callback::from(move |_| {
            log_estimate(&form);
            form.dispatch(FormAction::Compute);
        })
    };

    let reset = {
        let form = form.clone();
        Callback::from(move |_| {
            if Config::ENABLE_DEBUG_LOGGING {
                gloo::console::debug!("Calculator form reset");
            }
            form.dispatch(FormAction::Reset);
        })
    };

    EstimatorHandle {
        state: (*form).clone(),
        set_car_km,
        set_electricity,
        select_fuel,
        compute,
        reset,
    }
}

fn log_estimate(form: &FormState) {
    if !Config::ENABLE_DEBUG_LOGGING {
        return;
    }

    let estimate = form.estimate();
    match serde_json::to_string(&serde_json::json!({
        "fuel": form.fuel_type,
        "estimate": estimate,
    })) {
        Ok(json) => gloo::console::log!(&format!("Estimate computed: {json}")),
        Err(e) => gloo::console::warn!(&format!("Failed to serialize estimate: {e}")),
    }
}
