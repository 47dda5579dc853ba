use crate::{Color, Modifier, Rect};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextOverflow {
    #[default]
    Visible,
    Clip,
    Ellipsis,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        /// sp; scaled by density and text scale at layout time.
        font_size: f32,
        font_weight: u16,
        /// sp; `None` uses `font_size * 1.3`.
        line_height: Option<f32>,
        soft_wrap: bool,
        max_lines: Option<usize>,
        overflow: TextOverflow,
    },
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first iterator over this view and all descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &View> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let v = stack.pop()?;
            stack.extend(v.children.iter().rev());
            Some(v)
        })
    }

    /// Text content if this is a text view.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        weight: u16,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}
