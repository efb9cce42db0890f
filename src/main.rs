#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use std::env;

use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{version_label, APP_NAME};

fn main() {
    init_tracing();
    tracing::info!(version = %version_label(), "starting {APP_NAME}");
    apply_wayland_workarounds();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

/// `RUST_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Explicit sync on Wayland crashes some GPU drivers. Fall back to GL and turn
/// off WebKit's DMABUF renderer unless the user already chose otherwise.
fn apply_wayland_workarounds() {
    if env::var_os("WAYLAND_DISPLAY").is_none() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if env::var_os(key).is_none() {
            tracing::debug!(key, value, "applying wayland workaround");
            env::set_var(key, value);
        }
    }
}
