use dioxus::prelude::*;
use folio_engine::{PlayerState, StyleTokens};

use crate::ui::media::{MediaCommand, command_script, element_id, position_script};

/// Sends a command to the element, pausing the player state if it was refused.
async fn send(id: String, command: MediaCommand, mut state: Signal<PlayerState>) {
    let mut eval = document::eval(&command_script(&id, command));
    let failure = match eval.join::<bool>().await {
        Ok(true) => return,
        Ok(false) => format!("no element with id {id}"),
        Err(e) => format!("{e:?}"),
    };
    log::warn!("Audio command {command:?} failed: {failure}");
    if command == MediaCommand::Play {
        state.write().on_play_failed();
    }
}

/// Reads the element's position and feeds it into the player state.
async fn sync_position(id: String, mut state: Signal<PlayerState>) {
    let mut eval = document::eval(&position_script(&id));
    match eval.join::<(f64, f64)>().await {
        Ok((current, duration)) => {
            let mut state = state.write();
            if duration > 0.0 {
                state.on_loaded(duration);
            }
            state.on_time_update(current);
        }
        Err(e) => log::warn!("Failed to read audio position: {e:?}"),
    }
}

#[component]
pub fn AudioPlayer(src: String, title: Option<String>, tokens: StyleTokens) -> Element {
    let mut state = use_signal(PlayerState::default);
    let id = element_id(&src);

    let player = *state.read();
    let max = format!("{}", player.duration);
    let value = format!("{}", player.current_time);
    let progress = format!("{:.1}%", player.progress() * 100.0);
    let time_label = format!("{} / {}", player.elapsed_label(), player.duration_label());

    let on_toggle = {
        let id = id.clone();
        move |_| {
            let command = if state.read().playing {
                MediaCommand::Pause
            } else {
                MediaCommand::Play
            };
            state.write().toggle();
            spawn(send(id.clone(), command, state));
        }
    };

    let on_stop = {
        let id = id.clone();
        move |_| {
            state.write().stop();
            spawn(send(id.clone(), MediaCommand::Stop, state));
        }
    };

    let on_rate = {
        let id = id.clone();
        move |_| {
            let rate = state.write().cycle_rate();
            spawn(send(id.clone(), MediaCommand::Rate(rate), state));
        }
    };

    let on_seek = {
        let id = id.clone();
        move |evt: FormEvent| {
            if let Ok(time) = evt.value().parse::<f64>() {
                state.write().seek(time);
                let clamped = state.read().current_time;
                spawn(send(id.clone(), MediaCommand::Seek(clamped), state));
            }
        }
    };

    let on_metadata = {
        let id = id.clone();
        move |_| {
            spawn(sync_position(id.clone(), state));
        }
    };

    let on_time = {
        let id = id.clone();
        move |_| {
            spawn(sync_position(id.clone(), state));
        }
    };

    rsx! {
        div {
            class: "audio-player {tokens.audio_surface}",
            aria_label: "Audio player",
            if let Some(ref title) = title {
                div { class: "audio-player-title", "{title}" }
            }
            audio {
                id: "{id}",
                src: "{src}",
                preload: "metadata",
                onloadedmetadata: on_metadata,
                ontimeupdate: on_time,
                onended: move |_| state.write().on_ended(),
            }
            input {
                r#type: "range",
                class: "audio-player-seek",
                min: "0",
                max: "{max}",
                step: "0.01",
                value: "{value}",
                style: "--progress: {progress};",
                aria_label: "Seek audio timeline",
                oninput: on_seek,
            }
            div {
                class: "audio-player-controls",
                button {
                    class: "audio-player-button",
                    aria_label: if player.playing { "Pause" } else { "Play" },
                    onclick: on_toggle,
                    if player.playing { "Pause" } else { "Play" }
                }
                button {
                    class: "audio-player-button",
                    aria_label: "Stop",
                    onclick: on_stop,
                    "Stop"
                }
                button {
                    class: "audio-player-rate",
                    aria_label: "Change playback speed",
                    onclick: on_rate,
                    "{player.rate}"
                }
                span {
                    class: "audio-player-time",
                    "{time_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_engine::Theme;

    #[test]
    fn test_audio_player_initial_state() {
        let mut dom = VirtualDom::new_with_props(
            AudioPlayer,
            AudioPlayerProps {
                src: "/audio/story.mp3".to_string(),
                title: Some("Listen to this story".to_string()),
                tokens: *Theme::Light.tokens(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Listen to this story"));
        assert!(html.contains("audio-audio-story-mp3"));
        assert!(html.contains("audio-surface-light"));
        assert!(html.contains("00:00 / 00:00"));
        assert!(html.contains(">1x<"));
        assert!(html.contains(">Play<"));
    }
}
