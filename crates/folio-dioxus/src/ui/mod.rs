mod app;
pub mod components;
pub mod media;
pub mod share;

pub use app::{App, Route, Site};
