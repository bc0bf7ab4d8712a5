//! Scripts run in the page through `document::eval`: the `<audio>` element
//! behind the audio player, and the window scroll position.

use folio_engine::PlaybackRate;

/// A command sent to the media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaCommand {
    Play,
    Pause,
    Stop,
    Seek(f64),
    Rate(PlaybackRate),
}

/// Element id of the audio tag for the given source.
pub fn element_id(src: &str) -> String {
    let slug: String = src
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("audio-{}", slug.trim_matches('-'))
}

/// Script applying `command`, returning `true` once the element accepted it.
///
/// Play waits for the element's play promise, so a refused play surfaces as an
/// eval error.
pub fn command_script(element_id: &str, command: MediaCommand) -> String {
    let target =
        format!("const el = document.getElementById('{element_id}'); if (!el) return false;");
    let action = match command {
        MediaCommand::Play => "await el.play();".to_string(),
        MediaCommand::Pause => "el.pause();".to_string(),
        MediaCommand::Stop => "el.pause(); el.currentTime = 0;".to_string(),
        MediaCommand::Seek(time) => format!("el.currentTime = {time};"),
        MediaCommand::Rate(rate) => format!("el.playbackRate = {};", rate.value()),
    };
    format!("{target} {action} return true;")
}

/// Script returning `[currentTime, duration]`, or `[0, 0]` when the element is missing.
pub fn position_script(element_id: &str) -> String {
    format!(
        "const el = document.getElementById('{element_id}'); \
         return el ? [el.currentTime || 0, isFinite(el.duration) ? el.duration : 0] : [0, 0];"
    )
}

/// Script that sends `[scrollY, scrollHeight, innerHeight]` now and on every
/// scroll or resize.
pub fn scroll_script() -> &'static str {
    "const report = () => dioxus.send([\
         window.scrollY, document.documentElement.scrollHeight, window.innerHeight]); \
     report(); \
     window.addEventListener('scroll', report, { passive: true }); \
     window.addEventListener('resize', report);"
}
