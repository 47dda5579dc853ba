//! Home screen section header: a title and an optional "Show all" action.

use homescreen_core::{
    AlignItems, Callback, Color, Modifier, TextStyle, Theme, VerticalAlign, View, theme,
    typography,
};
use homescreen_ui::{ClickableText, Row, Text, TextExt, ViewExt};

use crate::store::AppStore;
use crate::strings::{StringRes, string_resource};

/// Where a header gets its wallpaper state from.
#[derive(Clone)]
pub enum RenderMode {
    /// Design-time rendering; theme defaults only, the store is never read.
    Preview,
    Live(AppStore),
}

impl RenderMode {
    pub fn is_preview(&self) -> bool {
        matches!(self, RenderMode::Preview)
    }

    pub fn store(&self) -> Option<&AppStore> {
        match self {
            RenderMode::Preview => None,
            RenderMode::Live(store) => Some(store),
        }
    }
}

impl std::fmt::Debug for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Preview => f.write_str("Preview"),
            RenderMode::Live(_) => f.write_str("Live"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderColors {
    pub title: Color,
    pub action: Color,
}

impl HeaderColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.text_primary,
            action: theme.text_accent,
        }
    }
}

/// Title and action colors for the current wallpaper.
///
/// The default wallpaper always gets the theme accent for the action;
/// any other wallpaper uses `wallpaper_text_color` when present.
pub fn resolve_header_colors(
    theme: &Theme,
    is_wallpaper_default: bool,
    wallpaper_text_color: Option<Color>,
) -> HeaderColors {
    let action = if is_wallpaper_default {
        theme.text_accent
    } else {
        wallpaper_text_color.unwrap_or(theme.text_accent)
    };
    let colors = HeaderColors {
        title: wallpaper_text_color.unwrap_or(theme.text_primary),
        action,
    };
    log::trace!("header colors (default wallpaper: {is_wallpaper_default}): {colors:?}");
    colors
}

/// Home section header.
///
/// `description` is the accessibility label of the "Show all" action and is
/// unused when `on_show_all` is `None`.
pub fn SectionHeader(
    mode: &RenderMode,
    header_text: impl Into<String>,
    description: impl Into<String>,
    on_show_all: Option<Callback>,
) -> View {
    let theme = theme();
    let colors = match mode {
        RenderMode::Preview => HeaderColors::from_theme(&theme),
        RenderMode::Live(store) => {
            let is_wallpaper_default =
                store.select(|s| s.wallpaper_state.current_wallpaper.is_default());
            // TODO: feed Wallpaper::text_color through here once wallpaper
            // text colors are validated against the header typography.
            let wallpaper_adapted_text_color: Option<Color> = None;
            resolve_header_colors(&theme, is_wallpaper_default, wallpaper_adapted_text_color)
        }
    };
    SectionHeaderContent(
        header_text,
        colors.title,
        description,
        colors.action,
        on_show_all,
    )
}

pub fn SectionHeaderContent(
    header_text: impl Into<String>,
    title_color: Color,
    description: impl Into<String>,
    action_color: Color,
    on_show_all: Option<Callback>,
) -> View {
    let title = Text(header_text)
        .style(typography().headline6)
        .color(title_color)
        .max_lines(2)
        .overflow_ellipsize()
        .modifier(
            Modifier::new()
                .weight(1.0)
                .wrap_content_height(VerticalAlign::Top),
        );

    let action = on_show_all.map(|on_click| {
        ClickableText(
            string_resource(StringRes::RecentTabsShowAll),
            Modifier::new()
                .padding_start(16.0)
                .content_description(description),
            move || on_click(),
        )
        .style(TextStyle::new(14.0).color(action_color))
    });

    Row(Modifier::new()
        .fill_max_width()
        .align_items(AlignItems::Center))
    .child((title, action))
}
