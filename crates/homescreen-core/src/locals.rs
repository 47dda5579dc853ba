//! # Theming and locals
//!
//! Render-time parameters live in thread‑local “composition locals” instead
//! of being threaded through every widget:
//!
//! - `Theme`: the browser color palette of layers, text, icons and borders.
//! - `Typography`: named text styles such as `headline6`.
//! - `Density`: dp→px scale factor.
//! - `TextScale`: user font scaling (sp = dp × text scale).
//! - `TextDirection`: LTR or RTL.
//!
//! Override any of them for a subtree:
//!
//! ```rust
//! use homescreen_core::*;
//!
//! let accent = with_theme(Theme::for_variant(ThemeVariant::Dark), || {
//!     theme().text_accent
//! });
//! assert_eq!(accent, Theme::dark().text_accent);
//! ```
//!
//! Crates further up the stack can provide their own values through
//! `with_local` / `local`; lookups walk frames from innermost to outermost
//! and fall back to `Default`.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

/// Convenience: convert a raw dp scalar into px using current Density.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

/// Scale-independent pixels: dp further multiplied by the user text scale.
pub fn sp_to_px(sp: f32) -> f32 {
    dp_to_px(sp) * text_scale().0
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

/// Provide `value` to everything composed inside `f`.
pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided `T`, if any.
pub fn try_local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow().iter().rev().find_map(|frame| {
            frame
                .get(&TypeId::of::<T>())
                .and_then(|v| v.downcast_ref::<T>())
                .cloned()
        })
    })
}

/// Innermost provided `T`, or `T::default()`.
pub fn local<T: Clone + Default + 'static>() -> T {
    try_local::<T>().unwrap_or_default()
}

// Typed API

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
    Private,
}

/// Browser color palette used by home screen widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// App background.
    pub layer1: Color,
    /// Cards and raised surfaces.
    pub layer2: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Links and actions, e.g. "Show all".
    pub text_accent: Color,
    pub text_disabled: Color,
    pub icon_primary: Color,
    pub border_primary: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            layer1: Color::from_hex("#F9F9FB"),
            layer2: Color::from_hex("#FFFFFF"),
            text_primary: Color::from_hex("#15141A"),
            text_secondary: Color::from_hex("#5B5B66"),
            text_accent: Color::from_hex("#8000D7"),
            text_disabled: Color::from_hex("#15141A66"),
            icon_primary: Color::from_hex("#15141A"),
            border_primary: Color::from_hex("#CFCFD8"),
        }
    }

    pub fn dark() -> Self {
        Self {
            layer1: Color::from_hex("#1C1B22"),
            layer2: Color::from_hex("#2B2A33"),
            text_primary: Color::from_hex("#FBFBFE"),
            text_secondary: Color::from_hex("#CFCFD8"),
            text_accent: Color::from_hex("#C689FF"),
            text_disabled: Color::from_hex("#FBFBFE66"),
            icon_primary: Color::from_hex("#FBFBFE"),
            border_primary: Color::from_hex("#5B5B66"),
        }
    }

    pub fn private() -> Self {
        Self {
            layer1: Color::from_hex("#291D4F"),
            layer2: Color::from_hex("#342B4A"),
            ..Self::dark()
        }
    }

    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Light => Self::light(),
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Private => Self::private(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// A resolved text style. `color: None` means “inherit from the widget”.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    /// sp
    pub font_size: f32,
    pub font_weight: u16,
    /// sp
    pub line_height: Option<f32>,
}

impl TextStyle {
    pub const fn new(font_size: f32) -> Self {
        Self {
            color: None,
            font_size,
            font_weight: 400,
            line_height: None,
        }
    }
    pub const fn weight(mut self, w: u16) -> Self {
        self.font_weight = w;
        self
    }
    pub const fn line_height(mut self, lh: f32) -> Self {
        self.line_height = Some(lh);
        self
    }
    pub const fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(16.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub headline5: TextStyle,
    pub headline6: TextStyle,
    pub headline7: TextStyle,
    pub subtitle1: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub caption: TextStyle,
    pub button: TextStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline5: TextStyle::new(24.0).line_height(32.0),
            headline6: TextStyle::new(16.0).weight(500).line_height(24.0),
            headline7: TextStyle::new(16.0).line_height(24.0),
            subtitle1: TextStyle::new(16.0).line_height(24.0),
            body1: TextStyle::new(16.0).line_height(24.0),
            body2: TextStyle::new(14.0).line_height(20.0),
            caption: TextStyle::new(12.0).line_height(16.0),
            button: TextStyle::new(14.0).weight(500).line_height(16.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextScale(pub f32);
impl Default for TextScale {
    fn default() -> Self {
        Self(1.0)
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_local(theme, f)
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    with_local(typography, f)
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_local(density, f)
}

pub fn with_text_scale<R>(ts: TextScale, f: impl FnOnce() -> R) -> R {
    with_local(ts, f)
}

pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    with_local(dir, f)
}

// Getters with defaults if not set

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn typography() -> Typography {
    local::<Typography>()
}

pub fn density() -> Density {
    local::<Density>()
}

pub fn text_scale() -> TextScale {
    local::<TextScale>()
}

pub fn text_direction() -> TextDirection {
    local::<TextDirection>()
}
