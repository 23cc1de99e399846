use yew::prelude::*;

use crate::models::estimate::EstimateResult;

#[derive(Properties, PartialEq)]
pub struct EstimateDisplayProps {
    pub result: EstimateResult,
    pub on_reset: Callback<()>,
}

#[function_component(EstimateDisplay)]
pub fn estimate_display(props: &EstimateDisplayProps) -> Html {
    let messages = props.result.messages();

    let onclick = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    html! {
        <div class="estimate-display">
            <p class="result">{messages.result}</p>

            if let Some(warning) = messages.warning {
                <p class="warning">{warning}</p>
            }
            if let Some(tip) = messages.tip {
                <p class="tip">{tip}</p>
            }

            <button type="button" class="reset-button" {onclick}>
                {"Reset"}
            </button>
        </div>
    }
}
