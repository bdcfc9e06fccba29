//! Async asset loading through macroquad's file API (works on native and wasm).

use std::fmt;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use macroquad::prelude::*;

use crate::background::Background;
use crate::config::GameConfig;
use crate::error::LoadError;
use crate::level::LevelGeometry;

fn path_str(path: &Path) -> anyhow::Result<&str> {
    path.to_str()
        .with_context(|| format!("Asset path is not valid UTF-8: {}", path.display()))
}

/// Read the optional config file. Missing or unusable files give the defaults.
pub async fn load_config(path: &str) -> GameConfig {
    config_or_default(path, load_string(path).await)
}

/// Settle on a config from the outcome of reading `path`, logging why the
/// defaults were used when they were.
fn config_or_default<E: fmt::Display>(path: &str, read: Result<String, E>) -> GameConfig {
    match read {
        Ok(txt) => match GameConfig::from_json_str(&txt) {
            Ok(cfg) => {
                info!("Config loaded from {path}");
                cfg
            }
            Err(err) => {
                warn!("Ignoring config {path}: {err}");
                GameConfig::default()
            }
        },
        Err(err) => {
            info!("No config at {path} ({err}); using defaults");
            GameConfig::default()
        }
    }
}

/// Fetch and parse the level named in the config.
pub async fn load_level(cfg: &GameConfig) -> anyhow::Result<LevelGeometry> {
    let path = path_str(&cfg.level_path)?;
    if cfg.level_path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(LoadError::UnsupportedFormat(path.to_owned()).into());
    }

    let txt = load_string(path)
        .await
        .with_context(|| format!("Loading level {}", path))?;
    let level = LevelGeometry::from_json_str(&txt, cfg.scale, cfg.sky_offset)
        .with_context(|| format!("Parsing level {}", path))?;
    Ok(level)
}

/// Fetch the background strip and sample its sky colour.
pub async fn load_background(cfg: &GameConfig) -> anyhow::Result<(Texture2D, Background)> {
    let path = path_str(&cfg.background_path)?;
    let image = load_image(path)
        .await
        .with_context(|| format!("Loading background {}", path))?;
    let texture = Texture2D::from_image(&image);
    Ok((texture, Background::from_image(&image)))
}
