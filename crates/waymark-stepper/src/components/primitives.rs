//! Presentational leaves: avatar, button, card, progress bar.
//!
//! Each one renders a label or value and, where it makes sense, reports a
//! click. None of them know about journeys.

use dioxus::prelude::*;

/// Round badge holding a glyph or short label.
#[component]
pub fn Avatar(class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "avatar {class}",
            {children}
        }
    }
}

/// Button sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
        }
    }
}

/// Labeled button.
#[component]
pub fn Button(
    label: String,
    #[props(default)] size: ButtonSize,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "btn {size.css_class()}",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// Container that reports clicks only when `clickable` is set.
#[component]
pub fn Card(
    class: String,
    clickable: bool,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "card {class}",
            role: if clickable { "button" } else { "group" },
            onclick: move |_| {
                if clickable {
                    onclick.call(());
                }
            },
            {children}
        }
    }
}

/// Determinate progress bar. `value` is a percentage.
#[component]
pub fn ProgressBar(value: f64) -> Element {
    let pct = value.clamp(0.0, 100.0);

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuenow": "{pct:.0}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div {
                class: "progress-fill",
                style: "width: {pct:.2}%",
            }
        }
    }
}
