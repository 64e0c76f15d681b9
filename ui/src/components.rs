//! Small form controls shared by the app's views.

use dioxus::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// Controlled text input: the caller owns the value and receives every
/// change through `oninput`.
#[component]
pub fn Input(
    #[props(default)] id: Option<String>,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Secondary => "button--secondary",
    };
    rsx! {
        button {
            class: "button {variant_class} {class}",
            r#type: r#type,
            disabled: disabled,
            {children}
        }
    }
}
