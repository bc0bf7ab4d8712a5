use dioxus::prelude::*;
use folio_config::Config;
use folio_engine::{PortfolioItem, PostCollection};

use super::components::{BackgroundEffect, BlogList, BlogPost, ErrorScreen, Navigation, Portfolio};

const FOLIO_CSS: &str = include_str!("../assets/folio.css");

/// Everything loaded from the content directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub posts: PostCollection,
    pub portfolio: Vec<PortfolioItem>,
}

/// Page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    BlogList,
    Post(String),
    Portfolio,
}

#[component]
pub fn App(config: Config, site: Site) -> Element {
    let mut route = use_signal(|| Route::BlogList);
    let mut theme = use_signal(|| config.theme);
    let base_url = use_hook(|| config.effective_base_url());

    let tokens = *theme.read().tokens();

    rsx! {
        style { {FOLIO_CSS} }
        div {
            class: "app-container {tokens.root}",
            BackgroundEffect { tokens }
            Navigation {
                route: route.read().clone(),
                theme: *theme.read(),
                on_navigate: move |next: Route| route.set(next),
                on_theme_change: move |next| theme.set(next),
            }
            main {
                class: "main-content",
                {match route.read().clone() {
                    Route::BlogList => rsx! {
                        BlogList {
                            posts: site.posts.clone(),
                            tokens,
                            base_url: base_url.clone(),
                            on_open: move |slug: String| route.set(Route::Post(slug)),
                        }
                    },
                    Route::Post(slug) => match site.posts.get(&slug) {
                        Some(post) => rsx! {
                            BlogPost {
                                key: "{slug}",
                                post: post.clone(),
                                default_mode: config.render_mode,
                                tokens,
                                share_url: post.share_url(&base_url),
                                on_back: move |_| route.set(Route::BlogList),
                            }
                        },
                        None => rsx! {
                            ErrorScreen {
                                title: "Post not found".to_string(),
                                message: format!("There is no post called '{slug}'"),
                                details: None,
                            }
                        },
                    },
                    Route::Portfolio => rsx! {
                        Portfolio { items: site.portfolio.clone(), tokens }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_engine::{Post, Theme};
    use std::path::PathBuf;

    fn site() -> Site {
        let post = Post::parse(
            "first-post",
            "+++\ntitle = \"First Post\"\npublished_date = \"2024-04-01\"\ntags = [\"design\"]\n+++\nHello there.",
        )
        .unwrap();
        Site {
            posts: PostCollection::new([post]),
            portfolio: Vec::new(),
        }
    }

    #[test]
    fn test_app_starts_on_blog_list_with_configured_theme() {
        let config = Config {
            theme: Theme::Colorful,
            ..Config::new(PathBuf::from("/srv/site"))
        };
        let mut dom = VirtualDom::new_with_props(App, AppProps { config, site: site() });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("theme-colorful"));
        assert!(html.contains("First Post"));
        assert!(html.contains("Read more"));
    }
}
