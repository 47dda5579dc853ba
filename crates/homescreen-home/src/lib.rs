#![allow(non_snake_case)]
//! Home screen section header.
//!
//! [`SectionHeader`] renders a section title with an optional "Show all"
//! action whose colors follow the current wallpaper in the [`AppStore`].
//! [`SectionHeaderHost`] keeps a rendered frame up to date as the store
//! changes; [`HomeConfig`] supplies theme, density and strings.

pub mod config;
pub mod error;
pub mod host;
pub mod preview;
pub mod section_header;
pub mod store;
pub mod strings;

pub use config::{HomeConfig, ThemeSetting};
pub use error::{HomeError, Result};
pub use host::SectionHeaderHost;
pub use preview::{preview, preview_with};
pub use section_header::{
    HeaderColors, RenderMode, SectionHeader, SectionHeaderContent, resolve_header_colors,
};
pub use store::{
    AppAction, AppReducer, AppState, AppStore, DEFAULT_WALLPAPER_NAME, Subscription, Wallpaper,
    WallpaperCollection, WallpaperState, reduce,
};
pub use strings::{StringRes, Strings, string_resource, with_strings};
