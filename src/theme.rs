//! Light/dark palettes and the single persisted preference.
//!
//! The only state that survives a restart is the theme name, stored as a
//! bare `light`/`dark` string under the user config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                desktop_bg: rgb(24, 24, 28),
                desktop_fg: rgb(120, 125, 140),
                window_bg: rgb(31, 31, 31),
                window_border: rgb(70, 70, 78),
                window_border_focused: rgb(160, 170, 200),
                title_bar_bg: rgb(44, 44, 50),
                title_bar_fg: rgb(200, 200, 210),
                title_bar_focused_bg: rgb(58, 70, 110),
                title_bar_focused_fg: rgb(240, 244, 255),
                text: rgb(212, 214, 222),
                text_dim: rgb(140, 143, 155),
                accent: rgb(100, 150, 255),
                card_bg: rgb(42, 42, 48),
                chip_bg: rgb(48, 58, 92),
                chip_fg: rgb(150, 180, 255),
            },
            Theme::Light => Palette {
                desktop_bg: rgb(246, 246, 240),
                desktop_fg: rgb(130, 135, 150),
                window_bg: rgb(255, 255, 250),
                window_border: rgb(200, 202, 210),
                window_border_focused: rgb(33, 96, 167),
                title_bar_bg: rgb(235, 236, 240),
                title_bar_fg: rgb(60, 60, 70),
                title_bar_focused_bg: rgb(214, 226, 244),
                title_bar_focused_fg: rgb(20, 40, 80),
                text: rgb(45, 48, 58),
                text_dim: rgb(120, 124, 136),
                accent: rgb(0, 64, 221),
                card_bg: rgb(238, 240, 244),
                chip_bg: rgb(222, 230, 246),
                chip_fg: rgb(0, 64, 221),
            },
        }
    }
}

/// Style tokens consumed by chrome and panel rendering. Rendering only;
/// nothing here affects state transitions.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub desktop_bg: Color,
    pub desktop_fg: Color,
    pub window_bg: Color,
    pub window_border: Color,
    pub window_border_focused: Color,
    pub title_bar_bg: Color,
    pub title_bar_fg: Color,
    pub title_bar_focused_bg: Color,
    pub title_bar_focused_fg: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub card_bg: Color,
    pub chip_bg: Color,
    pub chip_fg: Color,
}

/// Map an RGB triple to a terminal color: truecolor when the terminal
/// advertises it, nearest xterm-256 cube index otherwise.
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    if let Ok(var) = std::env::var("COLORTERM") {
        let lv = var.to_lowercase();
        if lv.contains("truecolor") || lv.contains("24bit") {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Indexed(xterm_index(r, g, b))
}

fn xterm_index(r: u8, g: u8, b: u8) -> u8 {
    let scale = |v: u8| ((v as u16 * 5 + 127) / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme store i/o: {0}")]
    Io(#[from] io::Error),
    #[error("unrecognized theme name {0:?}")]
    Unrecognized(String),
}

/// File-backed store for the theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/deskfolio/theme`, falling back to `~/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
        Some(base.join("deskfolio").join("theme"))
    }

    /// Load the stored preference. A missing file is `Ok(None)`; garbage
    /// content is an error so a corrupted store is noticed, not ignored.
    pub fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Theme::parse(&raw)
            .map(Some)
            .ok_or_else(|| ThemeStoreError::Unrecognized(raw.trim().to_string()))
    }

    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())?;
        tracing::debug!(theme = theme.as_str(), "saved theme preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_both_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn parse_accepts_stored_names_only() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn store_round_trips_the_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("nested").join("theme"));
        assert!(store.load().unwrap().is_none());
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "mauve").unwrap();
        let store = ThemeStore::new(path);
        assert!(matches!(
            store.load(),
            Err(ThemeStoreError::Unrecognized(name)) if name == "mauve"
        ));
    }

    #[test]
    fn xterm_fallback_hits_cube_range() {
        let idx = xterm_index(200, 100, 0);
        assert!((16..=231).contains(&idx));
    }
}
