use web_sys::HtmlButtonElement;
use yew::prelude::*;

use crate::models::fuel::FuelType;

#[derive(Properties, PartialEq)]
pub struct FuelSelectorProps {
    pub fuel: FuelType,
    pub on_change: Callback<FuelType>,
}

/// Row of fuel buttons with the active one highlighted
#[function_component(FuelSelector)]
pub fn fuel_selector(props: &FuelSelectorProps) -> Html {
    let onclick = {
        let callback = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            let target: HtmlButtonElement = e.target_unchecked_into();
            callback.emit(FuelType::from_key_or_default(&target.value()));
        })
    };

    html! {
        <div class="fuel-buttons" role="group" aria-label="Fuel type">
            {
                FuelType::all().iter().map(|fuel| {
                    let class = classes!(
                        "fuel-button",
                        (*fuel == props.fuel).then_some("fuel-button-selected")
                    );
                    html! {
                        <button
                            type="button"
                            {class}
                            value={fuel.key()}
                            onclick={onclick.clone()}
                        >
                            {fuel.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
