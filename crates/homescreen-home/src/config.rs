//! Persisted home screen settings.

use std::collections::BTreeMap;

use homescreen_core::{
    Density, TextDirection, TextScale, Theme, ThemeVariant, Typography, with_density,
    with_text_direction, with_text_scale, with_theme, with_typography,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{AppState, DEFAULT_WALLPAPER_NAME, Wallpaper, WallpaperState};
use crate::strings::{StringRes, Strings, with_strings};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSetting {
    #[default]
    Light,
    Dark,
    Private,
}

impl From<ThemeSetting> for ThemeVariant {
    fn from(t: ThemeSetting) -> Self {
        match t {
            ThemeSetting::Light => ThemeVariant::Light,
            ThemeSetting::Dark => ThemeVariant::Dark,
            ThemeSetting::Private => ThemeVariant::Private,
        }
    }
}

/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub theme: ThemeSetting,
    /// dp→px multiplier.
    pub density: f32,
    /// Extra multiplier for sp on top of density.
    pub text_scale: f32,
    pub rtl: bool,
    pub wallpaper: String,
    pub strings: BTreeMap<StringRes, String>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::default(),
            density: 1.0,
            text_scale: 1.0,
            rtl: false,
            wallpaper: DEFAULT_WALLPAPER_NAME.to_string(),
            strings: BTreeMap::new(),
        }
    }
}

impl HomeConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        log::debug!("loaded home config: {cfg:?}");
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn theme(&self) -> Theme {
        Theme::for_variant(self.theme.into())
    }

    pub fn strings(&self) -> Strings {
        Strings::with_overrides(self.strings.clone())
    }

    /// Runs `f` with this config's theme, typography, density, text scale,
    /// direction and strings installed as locals.
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        let dir = if self.rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        };
        with_theme(self.theme(), || {
            with_typography(Typography::default(), || {
                with_density(Density { scale: self.density }, || {
                    with_text_scale(TextScale(self.text_scale), || {
                        with_text_direction(dir, || with_strings(self.strings(), f))
                    })
                })
            })
        })
    }

    /// Seeds an `AppState` from `available`. The default wallpaper is always
    /// available; an unknown configured wallpaper selects the default.
    pub fn initial_state(&self, available: Vec<Wallpaper>) -> AppState {
        let mut available = available;
        if !available.iter().any(Wallpaper::is_default) {
            available.insert(0, Wallpaper::default_wallpaper());
        }
        let current = match available.iter().find(|w| w.name == self.wallpaper) {
            Some(w) => w.clone(),
            None => {
                log::warn!(
                    "configured wallpaper {:?} is not available, using default",
                    self.wallpaper
                );
                Wallpaper::default_wallpaper()
            }
        };
        AppState {
            wallpaper_state: WallpaperState {
                current_wallpaper: current,
                available_wallpapers: available,
            },
        }
    }
}
