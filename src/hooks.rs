use crate::utils::coerce_number;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the raw text of a form field and its callbacks.
#[derive(Clone, PartialEq)]
pub struct FormField {
    /// The current text content of the input field.
    pub text: String,
    /// Callback for the input's `oninput` event. Updates the text state.
    pub on_text_input: Callback<InputEvent>,
    /// Callback to programmatically replace the text, used by Reset.
    pub set_text: Callback<String>,
}

impl FormField {
    /// The field read as a number; non-numeric text is zero.
    pub fn number(&self) -> f64 {
        coerce_number(&self.text)
    }

    pub fn reset_to(&self, value: impl ToString) {
        self.set_text.emit(value.to_string());
    }
}

/// Custom hook to manage the text state of a single input field.
#[hook]
pub fn use_form_field(initial: String) -> FormField {
    let text_state_handle: UseStateHandle<String> = use_state(|| initial);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let set_text = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |new_text: String| text_setter.set(new_text))
    };

    FormField {
        text: (*text_state_handle).clone(),
        on_text_input,
        set_text,
    }
}

/// Hook for a `<select>` bound to a string key.
#[hook]
pub fn use_select(initial: String) -> (UseStateHandle<String>, Callback<Event>) {
    let selected = use_state(|| initial);
    let onchange = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };
    (selected, onchange)
}
