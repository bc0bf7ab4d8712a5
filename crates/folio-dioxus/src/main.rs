use dioxus::prelude::*;
use folio_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use folio_config::Config;
use ui::components::ErrorScreen;
use ui::{App, Site};

/// Settings from the config file, with an optional CLI content path taking precedence.
fn resolve_config(cli_path: Option<PathBuf>) -> Result<Config, String> {
    let loaded = Config::load().map_err(|e| format!("Failed to load config file: {e}"))?;
    match (cli_path, loaded) {
        (Some(content_path), Some(config)) => Ok(Config {
            content_path,
            ..config
        }),
        (Some(content_path), None) => Ok(Config::new(content_path)),
        (None, Some(config)) => Ok(config),
        (None, None) => Err(format!(
            "No content path provided and no config file found at {}",
            Config::config_path().display()
        )),
    }
}

fn cli_content_path() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("folio starting up!");

    let program_name = env::args().next().unwrap_or_else(|| "folio".to_string());
    if env::args().count() > 2 {
        eprintln!("Usage: {program_name} [content-folder-path]");
        process::exit(1);
    }

    let config = match resolve_config(cli_content_path()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("Usage: {program_name} <content-folder-path>");
            eprintln!(
                "Or create a config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_content_dir(&config.content_path) {
        eprintln!(
            "Error: Content path '{}' is invalid: {e}",
            config.content_path.display()
        );
        process::exit(1);
    }

    log::info!("Serving content from {}", config.content_path.display());
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-resolve settings using same logic as main
    let config = match resolve_config(cli_content_path()) {
        Ok(config) => config,
        Err(message) => {
            return rsx! {
                ErrorScreen {
                    title: "Configuration Error".to_string(),
                    message,
                    details: None,
                }
            };
        }
    };

    let site = io::load_collection(&config.content_path).and_then(|posts| {
        io::load_portfolio(&config.content_path).map(|portfolio| Site { posts, portfolio })
    });

    match site {
        Ok(site) => rsx! {
            App { config, site }
        },
        Err(e) => {
            log::error!("Failed to load content: {e}");
            rsx! {
                ErrorScreen {
                    title: "Content Error".to_string(),
                    message: format!("Could not load content from {}", config.content_path.display()),
                    details: Some(e.to_string()),
                }
            }
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("folio")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
