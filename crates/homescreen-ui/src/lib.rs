#![allow(non_snake_case)]
//! Widgets, layout and paint.

pub mod inspect;
pub mod layout;

use homescreen_core::*;

pub use layout::{LayoutError, layout_and_paint};

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Single run of text in the current theme's primary text color.
pub fn Text(text: impl Into<String>) -> View {
    let body = typography().body1;
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().text_primary,
            font_size: body.font_size,
            font_weight: body.font_weight,
            line_height: None,
            soft_wrap: false,
            max_lines: None,
            overflow: TextOverflow::Visible,
        },
    )
}

/// Text that runs `on_click` when activated and is announced as a button.
///
/// A label set with `Modifier::content_description` replaces the visible
/// text for accessibility.
pub fn ClickableText(
    text: impl Into<String>,
    modifier: Modifier,
    on_click: impl Fn() + 'static,
) -> View {
    let semantics = match modifier.semantics.clone() {
        Some(s) => Semantics {
            role: Role::Button,
            ..s
        },
        None => Semantics::new(Role::Button),
    };
    Text(text).modifier(modifier.on_click(on_click).semantics(semantics))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

/// Absent children contribute nothing.
impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);

/// Method styling for `Text` views; a no-op on other kinds.
pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn size(self, sp: f32) -> View;
    fn weight(self, w: u16) -> View;
    fn max_lines(self, n: usize) -> View;
    fn single_line(self) -> View;
    fn overflow_ellipsize(self) -> View;
    fn overflow_clip(self) -> View;
    fn overflow_visible(self) -> View;
    /// Applies size, weight, line height and (if set) color from `style`.
    fn style(self, style: TextStyle) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, sp: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = sp;
        }
        self
    }
    fn weight(mut self, w: u16) -> View {
        if let ViewKind::Text { font_weight, .. } = &mut self.kind {
            *font_weight = w;
        }
        self
    }
    fn max_lines(mut self, n: usize) -> View {
        if let ViewKind::Text {
            max_lines,
            soft_wrap,
            ..
        } = &mut self.kind
        {
            *max_lines = Some(n);
            *soft_wrap = true;
        }
        self
    }
    fn single_line(mut self) -> View {
        if let ViewKind::Text {
            soft_wrap,
            max_lines,
            ..
        } = &mut self.kind
        {
            *soft_wrap = false;
            *max_lines = Some(1);
        }
        self
    }
    fn overflow_ellipsize(mut self) -> View {
        if let ViewKind::Text { overflow, .. } = &mut self.kind {
            *overflow = TextOverflow::Ellipsis;
        }
        self
    }
    fn overflow_clip(mut self) -> View {
        if let ViewKind::Text { overflow, .. } = &mut self.kind {
            *overflow = TextOverflow::Clip;
        }
        self
    }
    fn overflow_visible(mut self) -> View {
        if let ViewKind::Text { overflow, .. } = &mut self.kind {
            *overflow = TextOverflow::Visible;
        }
        self
    }
    fn style(mut self, style: TextStyle) -> View {
        if let ViewKind::Text {
            color,
            font_size,
            font_weight,
            line_height,
            ..
        } = &mut self.kind
        {
            *font_size = style.font_size;
            *font_weight = style.font_weight;
            *line_height = style.line_height;
            if let Some(c) = style.color {
                *color = c;
            }
        }
        self
    }
}
