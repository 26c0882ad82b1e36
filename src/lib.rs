mod common;
mod config;
mod controller;
pub mod domain;
mod engine_api;
mod event_log;
mod http_api;
mod logging;
pub mod protocol;
mod render;
mod reveal;
mod session;
pub mod ui;

pub use common::*;
pub use config::*;
pub use controller::*;
pub use engine_api::*;
pub use event_log::*;
pub use http_api::*;
pub use logging::init_logging;
pub use render::*;
pub use reveal::*;
pub use session::*;
