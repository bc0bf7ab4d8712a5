use dioxus::prelude::*;

use crate::ui::share::{linkedin_url, twitter_url};

#[component]
pub fn ShareLinks(url: String, title: String, button_class: String) -> Element {
    let twitter = twitter_url(&url, &title);
    let linkedin = linkedin_url(&url);

    rsx! {
        div {
            class: "share-links",
            a {
                class: "{button_class}",
                href: "{twitter}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "Share on Twitter",
                "Twitter"
            }
            a {
                class: "{button_class}",
                href: "{linkedin}",
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "Share on LinkedIn",
                "LinkedIn"
            }
        }
    }
}
