//! Theme system for the journey stepper.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Daylight,
    Midnight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Daylight => "daylight",
            Theme::Midnight => "midnight",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Daylight => "Daylight",
            Theme::Midnight => "Midnight",
        }
    }

    pub fn from_css_value(value: &str) -> Option<Theme> {
        Theme::all().iter().copied().find(|t| t.css_value() == value)
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Daylight, Theme::Midnight]
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    if let Some(theme) = Theme::from_css_value(&evt.value()) {
                        tracing::debug!("Switching theme to {}", theme.display_name());
                        *CURRENT_THEME.write() = theme;
                    }
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}
