use homescreen_core::View;

use crate::config::HomeConfig;
use crate::section_header::{RenderMode, SectionHeader};
use crate::strings::{StringRes, string_resource};

/// "Recently saved" header as shown in design previews: default config,
/// no store and no "Show all" action.
pub fn preview() -> View {
    preview_with(&HomeConfig::default())
}

pub fn preview_with(config: &HomeConfig) -> View {
    config.provide(|| {
        SectionHeader(
            &RenderMode::Preview,
            string_resource(StringRes::RecentlySavedTitle),
            string_resource(StringRes::RecentlySavedShowAllContentDescription),
            None,
        )
    })
}
