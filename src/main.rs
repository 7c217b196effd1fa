//! Sim Timeline Console
//!
//! An operator console for scrubbing and replaying recorded driving-simulation runs.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;

use std::path::Path;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::SETTINGS_FILE;
use crate::core::session::TimelineSession;
use crate::state::TimelineSettings;

/// `RUST_LOG` wins over the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    let settings = TimelineSettings::load_or_default(Path::new(SETTINGS_FILE));
    let session = match TimelineSession::new(&settings) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(error = %err, "cannot start timeline session");
            std::process::exit(1);
        }
    };

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Sim Timeline Console")
                .with_inner_size(LogicalSize::new(1280.0, 720.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(session)
        .launch(app::App);
}
