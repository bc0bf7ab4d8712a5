use dioxus::prelude::*;
use folio_engine::reading_progress;

use crate::ui::media::scroll_script;

fn bar_style(fraction: f64) -> String {
    format!("transform: scaleX({fraction:.3});")
}

/// Thin bar along the top of the window that fills as the reader scrolls
#[component]
pub fn ReadingProgress() -> Element {
    let mut fraction = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let mut eval = document::eval(scroll_script());
        loop {
            match eval.recv::<(f64, f64, f64)>().await {
                Ok((scroll_y, scroll_height, viewport_height)) => {
                    fraction.set(reading_progress(scroll_y, scroll_height, viewport_height));
                }
                Err(e) => {
                    log::debug!("Stopped tracking reading progress: {e:?}");
                    break;
                }
            }
        }
    });

    let style = bar_style(fraction());

    rsx! {
        div {
            class: "reading-progress",
            role: "progressbar",
            aria_label: "Reading progress",
            div { class: "reading-progress-bar", style: "{style}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bar_style_scales_by_fraction() {
        assert_eq!(bar_style(0.0), "transform: scaleX(0.000);");
        assert_eq!(bar_style(0.25), "transform: scaleX(0.250);");
    }

    #[test]
    fn test_reading_progress_starts_empty() {
        let mut dom = VirtualDom::new(ReadingProgress);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("reading-progress-bar"));
        assert!(html.contains("scaleX(0.000)"));
        assert!(html.contains("Reading progress"));
    }
}
