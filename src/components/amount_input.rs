use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AmountInputProps {
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

/// Labelled text field for a numeric amount. The raw text is passed through unparsed.
#[function_component(AmountInput)]
pub fn amount_input(props: &AmountInputProps) -> Html {
    let oninput = {
        let callback = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <label class="amount-field">
            <span class="field-label">{&*props.label}</span>
            <input
                class="amount-input"
                type="text"
                inputmode="decimal"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </label>
    }
}
