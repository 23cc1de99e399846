use yew::prelude::*;

use carbon_calculator::components::{AmountInput, EstimateDisplay, FuelSelector};
use carbon_calculator::hooks::use_estimator::use_estimator;

#[function_component(App)]
fn app() -> Html {
    let estimator = use_estimator();
    let state = &estimator.state;

    let on_calculate = {
        let compute = estimator.compute.clone();
        Callback::from(move |_| compute.emit(()))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Carbon Calculator"}</h1>
            </header>

            <main class="app-main">
                <AmountInput
                    label="Car kilometers driven per week:"
                    placeholder="Ex: 100"
                    value={state.car_km.clone()}
                    on_input={estimator.set_car_km.clone()}
                />

                <span class="field-label">{"Fuel type:"}</span>
                <FuelSelector
                    fuel={state.fuel_type}
                    on_change={estimator.select_fuel.clone()}
                />

                <AmountInput
                    label="Monthly energy consumption (kWh):"
                    placeholder="Ex: 250"
                    value={state.electricity_kwh.clone()}
                    on_input={estimator.set_electricity.clone()}
                />

                <button type="button" class="calculate-button" onclick={on_calculate}>
                    {"Calculate"}
                </button>

                if let Some(result) = state.result {
                    <EstimateDisplay {result} on_reset={estimator.reset.clone()} />
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
