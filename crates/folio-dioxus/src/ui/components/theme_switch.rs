use dioxus::prelude::*;
use folio_engine::Theme;

/// One button per theme; the active one carries an indicator dot
#[component]
pub fn ThemeSwitch(current: Theme, on_change: EventHandler<Theme>) -> Element {
    rsx! {
        div {
            class: "theme-switch",
            role: "group",
            for theme in Theme::ALL {
                button {
                    key: "{theme}",
                    class: if theme == current { "theme-switch-button active" } else { "theme-switch-button" },
                    title: theme.label(),
                    aria_label: theme.aria_label(),
                    aria_pressed: if theme == current { "true" } else { "false" },
                    onclick: move |_| on_change.call(theme),
                    span { class: "material-symbols-outlined", {theme.icon()} }
                    if theme == current {
                        span { class: "theme-switch-indicator" }
                    }
                    span { class: "theme-switch-tooltip", {theme.label()} }
                }
            }
        }
    }
}
