use std::rc::Rc;

use taffy::{AlignItems, AlignSelf};

use crate::{Callback, Color, Role, Semantics, Size, TextDirection};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Where content sits inside a box that is taller than the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    /// Leading-edge padding; left in LTR, right in RTL.
    pub padding_start: Option<f32>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub background: Option<Color>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<f32>,
    pub align_self: Option<AlignSelf>,
    pub align_items_container: Option<AlignItems>,
    pub wrap_content_v: Option<VerticalAlign>,
    pub on_click: Option<Callback>,
    pub semantics: Option<Semantics>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_max_w", &self.fill_max_w)
            .field("fill_max_h", &self.fill_max_h)
            .field("padding", &self.padding)
            .field("padding_values", &self.padding_values)
            .field("padding_start", &self.padding_start)
            .field("min_width", &self.min_width)
            .field("min_height", &self.min_height)
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("background", &self.background)
            .field("flex_grow", &self.flex_grow)
            .field("flex_shrink", &self.flex_shrink)
            .field("flex_basis", &self.flex_basis)
            .field("align_self", &self.align_self)
            .field("align_items_container", &self.align_items_container)
            .field("wrap_content_v", &self.wrap_content_v)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("semantics", &self.semantics)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn padding_start(mut self, v: f32) -> Self {
        self.padding_start = Some(v);
        self
    }
    pub fn min_width(mut self, w: f32) -> Self {
        self.min_width = Some(w);
        self
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn max_height(mut self, h: f32) -> Self {
        self.max_height = Some(h);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_shrink(mut self, v: f32) -> Self {
        self.flex_shrink = Some(v);
        self
    }
    pub fn flex_basis(mut self, v: f32) -> Self {
        self.flex_basis = Some(v);
        self
    }
    /// Share of the remaining main-axis space, measured from a zero basis.
    pub fn weight(mut self, w: f32) -> Self {
        self.flex_grow = Some(w);
        self.flex_shrink = Some(1.0);
        self.flex_basis = Some(0.0);
        self.min_width = Some(0.0);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    /// Let the view keep its measured height and place its content at `align`
    /// inside whatever box the parent hands it.
    pub fn wrap_content_height(mut self, align: VerticalAlign) -> Self {
        self.wrap_content_v = Some(align);
        self
    }
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    /// Sets the accessibility label, keeping any role already assigned.
    pub fn content_description(mut self, label: impl Into<String>) -> Self {
        let s = self
            .semantics
            .take()
            .unwrap_or_else(|| Semantics::new(Role::Container));
        self.semantics = Some(s.label(label));
        self
    }

    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Padding in dp, with `padding_start` mapped to a physical side.
    pub fn resolved_padding(&self, dir: TextDirection) -> PaddingValues {
        let mut pv = if let Some(pv) = self.padding_values {
            pv
        } else if let Some(p) = self.padding {
            PaddingValues {
                left: p,
                right: p,
                top: p,
                bottom: p,
            }
        } else {
            PaddingValues::default()
        };
        if let Some(start) = self.padding_start {
            match dir {
                TextDirection::Ltr => pv.left = start,
                TextDirection::Rtl => pv.right = start,
            }
        }
        pv
    }
}
