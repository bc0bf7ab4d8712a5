use dioxus::prelude::*;
use folio_engine::Theme;

use super::ThemeSwitch;
use crate::ui::Route;

#[component]
pub fn Navigation(
    route: Route,
    theme: Theme,
    on_navigate: EventHandler<Route>,
    on_theme_change: EventHandler<Theme>,
) -> Element {
    let on_blog = matches!(route, Route::BlogList | Route::Post(_));
    let on_portfolio = route == Route::Portfolio;

    rsx! {
        nav {
            class: "navigation",
            span { class: "navigation-brand", "folio" }
            div {
                class: "navigation-links",
                button {
                    class: if on_blog { "nav-link active" } else { "nav-link" },
                    onclick: move |_| on_navigate.call(Route::BlogList),
                    "Blog"
                }
                button {
                    class: if on_portfolio { "nav-link active" } else { "nav-link" },
                    onclick: move |_| on_navigate.call(Route::Portfolio),
                    "Portfolio"
                }
            }
            ThemeSwitch { current: theme, on_change: on_theme_change }
        }
    }
}
