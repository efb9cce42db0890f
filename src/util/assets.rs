use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const RATES_JSON: &str = "/assets/rates.json";
pub const MANIFEST_JSON: &str = "/assets/manifest.json";
pub const TRACKING_TEMPLATE_JSON: &str = "/assets/tracking_sample.json";

static MAIN_CSS: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("embedded asset not found: {0}")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    Utf8(String),
    #[error("failed to parse embedded asset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            load_text("/assets/main.css").unwrap_or_else(|err| {
                tracing::warn!("stylesheet unavailable: {err}");
                String::new()
            })
        })
        .as_str()
}

/// Deserializes a bundled JSON document.
pub fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, AssetError> {
    let text = load_text(path)?;
    serde_json::from_str(&text).map_err(|source| AssetError::Parse {
        path: path.to_string(),
        source,
    })
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::Utf8(path.to_string()))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
