//! Flexbox layout (taffy) and paint into a `Scene`, plus the hit regions and
//! semantics nodes a frame needs for input and accessibility.

use std::collections::HashMap;

use homescreen_core::{
    Color, HitRegion, Modifier, Rect, Role, Scene, SceneNode, SemNode, TextDirection,
    TextOverflow, VerticalAlign, View, ViewId, ViewKind, dp_to_px, sp_to_px, text_direction,
    theme,
};
use homescreen_text::{ellipsize_line, measure_width, wrap_lines};
use taffy::style::{
    AlignItems, AlignSelf, AvailableSpace, Display, FlexDirection, JustifyContent, Style,
};
use taffy::style_helpers::{length, percent};
use taffy::{NodeId, TaffyTree};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout tree: {0}")]
    Taffy(#[from] taffy::TaffyError),
    #[error("view {0} has no layout node")]
    MissingNode(ViewId),
}

// Line height when a text style does not set one.
const DEFAULT_LINE_HEIGHT_EM: f32 = 1.3;

#[derive(Clone, Debug)]
struct TextCtx {
    text: String,
    size_px: f32,
    line_h_px: f32,
    soft_wrap: bool,
    max_lines: Option<usize>,
    overflow: TextOverflow,
}

impl TextCtx {
    fn from_kind(kind: &ViewKind) -> Option<Self> {
        match kind {
            ViewKind::Text {
                text,
                font_size,
                line_height,
                soft_wrap,
                max_lines,
                overflow,
                ..
            } => {
                let size_px = sp_to_px(*font_size);
                let line_h_px = line_height
                    .map(sp_to_px)
                    .unwrap_or(size_px * DEFAULT_LINE_HEIGHT_EM);
                Some(Self {
                    text: text.clone(),
                    size_px,
                    line_h_px,
                    soft_wrap: *soft_wrap,
                    max_lines: *max_lines,
                    overflow: *overflow,
                })
            }
            _ => None,
        }
    }

    fn natural_width(&self) -> f32 {
        self.text
            .split('\n')
            .map(|l| measure_width(l, self.size_px))
            .fold(0.0, f32::max)
    }

    fn min_content_width(&self) -> f32 {
        self.text
            .split_whitespace()
            .map(|w| measure_width(w, self.size_px))
            .fold(0.0, f32::max)
    }

    /// Lines as they will be painted into a box `width_px` wide.
    fn lines(&self, width_px: f32) -> Vec<String> {
        let ellipsize = self.overflow == TextOverflow::Ellipsis;
        if self.soft_wrap {
            return wrap_lines(&self.text, self.size_px, width_px, self.max_lines, ellipsize).0;
        }
        let mut lines: Vec<String> = self.text.split('\n').map(str::to_string).collect();
        if let Some(n) = self.max_lines {
            lines.truncate(n.max(1));
        }
        if ellipsize {
            for l in &mut lines {
                *l = ellipsize_line(l, self.size_px, width_px);
            }
        }
        lines
    }

    fn measure(
        &self,
        known: taffy::geometry::Size<Option<f32>>,
        avail: taffy::geometry::Size<AvailableSpace>,
    ) -> taffy::geometry::Size<f32> {
        let natural = self.natural_width();
        let width = known.width.unwrap_or_else(|| match avail.width {
            AvailableSpace::Definite(w) if self.soft_wrap || self.overflow != TextOverflow::Visible => {
                natural.min(w)
            }
            AvailableSpace::MinContent if self.soft_wrap => self.min_content_width(),
            _ => natural,
        });
        let n_lines = self.lines(width).len().max(1);
        taffy::geometry::Size {
            width,
            height: known.height.unwrap_or(self.line_h_px * n_lines as f32),
        }
    }
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind, dir: TextDirection) -> Style {
    let px = dp_to_px;
    let mut s = Style {
        display: Display::Flex,
        ..Default::default()
    };

    let is_row = matches!(kind, ViewKind::Row);
    let is_column = matches!(kind, ViewKind::Column);

    if is_row {
        s.flex_direction = if dir == TextDirection::Rtl {
            FlexDirection::RowReverse
        } else {
            FlexDirection::Row
        };
    } else {
        s.flex_direction = FlexDirection::Column;
    }

    s.align_items = if is_row || is_column || matches!(kind, ViewKind::Box) {
        Some(AlignItems::Stretch)
    } else {
        Some(AlignItems::FlexStart)
    };
    s.justify_content = Some(JustifyContent::FlexStart);
    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }

    // Flex props
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(sh) = m.flex_shrink {
        s.flex_shrink = sh;
    }
    if let Some(b_dp) = m.flex_basis {
        s.flex_basis = length(px(b_dp.max(0.0)));
    }
    if let Some(a) = m.align_self {
        s.align_self = Some(a);
    }
    // A wrapped-height child is never stretched across the row.
    if m.wrap_content_v.is_some() && s.align_self.is_none() {
        s.align_self = Some(AlignSelf::Center);
    }

    let pv = m.resolved_padding(dir);
    s.padding = taffy::geometry::Rect {
        left: length(px(pv.left)),
        right: length(px(pv.right)),
        top: length(px(pv.top)),
        bottom: length(px(pv.bottom)),
    };

    // Explicit size wins over fill
    let mut width_set = false;
    let mut height_set = false;
    if let Some(sz_dp) = m.size {
        if sz_dp.width.is_finite() {
            s.size.width = length(px(sz_dp.width.max(0.0)));
            width_set = true;
        }
        if sz_dp.height.is_finite() {
            s.size.height = length(px(sz_dp.height.max(0.0)));
            height_set = true;
        }
    }
    if let Some(w_dp) = m.width {
        s.size.width = length(px(w_dp.max(0.0)));
        width_set = true;
    }
    if let Some(h_dp) = m.height {
        s.size.height = length(px(h_dp.max(0.0)));
        height_set = true;
    }

    // Main axis fill -> weight (flex: 1 1 0%), cross axis fill -> tight (min==max==100%)
    if is_row {
        if m.fill_max_w && !width_set {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_shrink = s.flex_shrink.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.width = length(0.0);
        }
        if m.fill_max_h && !height_set {
            s.min_size.height = percent(1.0);
            s.max_size.height = percent(1.0);
        }
    } else {
        if m.fill_max_h && !height_set {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_shrink = s.flex_shrink.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.height = length(0.0);
        }
        if m.fill_max_w && !width_set {
            s.min_size.width = percent(1.0);
            s.max_size.width = percent(1.0);
        }
    }

    // user min/max clamps
    if let Some(v_dp) = m.min_width {
        s.min_size.width = length(px(v_dp.max(0.0)));
    }
    if let Some(v_dp) = m.min_height {
        s.min_size.height = length(px(v_dp.max(0.0)));
    }
    if let Some(v_dp) = m.max_width {
        s.max_size.width = length(px(v_dp.max(0.0)));
    }
    if let Some(v_dp) = m.max_height {
        s.max_size.height = length(px(v_dp.max(0.0)));
    }

    s
}

fn build_node(
    v: &View,
    t: &mut TaffyTree<TextCtx>,
    nodes_map: &mut HashMap<ViewId, NodeId>,
    dir: TextDirection,
) -> Result<NodeId, LayoutError> {
    let style = style_from_modifier(&v.modifier, &v.kind, dir);
    let node = match TextCtx::from_kind(&v.kind) {
        Some(ctx) => t.new_leaf_with_context(style, ctx)?,
        None => {
            let children = v
                .children
                .iter()
                .map(|c| build_node(c, t, nodes_map, dir))
                .collect::<Result<Vec<_>, _>>()?;
            t.new_with_children(style, &children)?
        }
    };
    nodes_map.insert(v.id, node);
    Ok(node)
}

fn stamp(mut v: View, id: &mut u64) -> View {
    v.id = *id;
    *id += 1;
    v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
    v
}

struct Paint<'a> {
    tree: &'a TaffyTree<TextCtx>,
    nodes: &'a HashMap<ViewId, NodeId>,
    dir: TextDirection,
    scene: Scene,
    hits: Vec<HitRegion>,
    sems: Vec<SemNode>,
}

impl Paint<'_> {
    fn walk(&mut self, v: &View, parent_offset_px: (f32, f32)) -> Result<(), LayoutError> {
        let tree = self.tree;
        let node = *self
            .nodes
            .get(&v.id)
            .ok_or(LayoutError::MissingNode(v.id))?;
        let l = tree.layout(node)?;
        let rect = Rect {
            x: parent_offset_px.0 + l.location.x,
            y: parent_offset_px.1 + l.location.y,
            w: l.size.width,
            h: l.size.height,
        };

        let pv = v.modifier.resolved_padding(self.dir);
        let content_rect = Rect {
            x: rect.x + dp_to_px(pv.left),
            y: rect.y + dp_to_px(pv.top),
            w: (rect.w - dp_to_px(pv.left) - dp_to_px(pv.right)).max(0.0),
            h: (rect.h - dp_to_px(pv.top) - dp_to_px(pv.bottom)).max(0.0),
        };

        if let Some(bg) = v.modifier.background {
            self.scene.nodes.push(SceneNode::Rect {
                rect,
                color: bg,
                radius: 0.0,
            });
        }

        // Padding is spacing around the control, not part of it.
        if let Some(on_click) = &v.modifier.on_click {
            self.hits.push(HitRegion {
                id: v.id,
                rect: content_rect,
                on_click: Some(on_click.clone()),
            });
        }

        match &v.kind {
            ViewKind::Text {
                text,
                color,
                font_weight,
                ..
            } => {
                if let Some(ctx) = tree.get_node_context(node) {
                    self.paint_text(ctx, content_rect, *color, *font_weight, v);
                }
                let (role, label, focused, enabled) = match &v.modifier.semantics {
                    Some(s) => (
                        s.role,
                        s.label.clone().or_else(|| Some(text.clone())),
                        s.focused,
                        s.enabled,
                    ),
                    None => (Role::Text, Some(text.clone()), false, true),
                };
                self.sems.push(SemNode {
                    id: v.id,
                    role,
                    label,
                    rect: content_rect,
                    focused,
                    enabled,
                });
            }
            _ => {
                if let Some(s) = &v.modifier.semantics {
                    self.sems.push(SemNode {
                        id: v.id,
                        role: s.role,
                        label: s.label.clone(),
                        rect: content_rect,
                        focused: s.focused,
                        enabled: s.enabled,
                    });
                }
            }
        }

        for c in &v.children {
            self.walk(c, (rect.x, rect.y))?;
        }
        Ok(())
    }

    fn paint_text(&mut self, ctx: &TextCtx, content: Rect, color: Color, weight: u16, v: &View) {
        let lines = ctx.lines(content.w);
        let block_h = ctx.line_h_px * lines.len() as f32;
        let slack = (content.h - block_h).max(0.0);
        let dy = match v.modifier.wrap_content_v.unwrap_or_default() {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Center => slack * 0.5,
            VerticalAlign::Bottom => slack,
        };

        let need_clip = ctx.overflow == TextOverflow::Clip
            && lines
                .iter()
                .any(|l| measure_width(l, ctx.size_px) > content.w + 0.5);
        if need_clip {
            self.scene.nodes.push(SceneNode::PushClip { rect: content });
        }
        for (i, ln) in lines.into_iter().enumerate() {
            self.scene.nodes.push(SceneNode::Text {
                rect: Rect {
                    x: content.x,
                    y: content.y + dy + i as f32 * ctx.line_h_px,
                    w: content.w,
                    h: ctx.line_h_px,
                },
                text: ln,
                color,
                size: ctx.size_px,
                weight,
            });
        }
        if need_clip {
            self.scene.nodes.push(SceneNode::PopClip);
        }
    }
}

/// Lay out `root` in a `size_px` window and paint it.
///
/// View ids are reassigned in depth-first order starting at 1, so ids in the
/// returned hit regions and semantics nodes are stable for identical trees.
pub fn layout_and_paint(
    root: &View,
    size_px: (u32, u32),
) -> Result<(Scene, Vec<HitRegion>, Vec<SemNode>), LayoutError> {
    let dir = text_direction();
    let mut id = 1u64;
    let root = stamp(root.clone(), &mut id);

    let mut taffy: TaffyTree<TextCtx> = TaffyTree::new();
    let mut nodes_map = HashMap::new();
    let root_node = build_node(&root, &mut taffy, &mut nodes_map, dir)?;

    {
        let mut rs = taffy.style(root_node)?.clone();
        rs.size.width = length(size_px.0 as f32);
        rs.size.height = length(size_px.1 as f32);
        taffy.set_style(root_node, rs)?;
    }

    let available = taffy::geometry::Size {
        width: AvailableSpace::Definite(size_px.0 as f32),
        height: AvailableSpace::Definite(size_px.1 as f32),
    };
    taffy.compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
        match ctx {
            Some(text) => text.measure(known, avail),
            None => taffy::geometry::Size::ZERO,
        }
    })?;

    let mut paint = Paint {
        tree: &taffy,
        nodes: &nodes_map,
        dir,
        scene: Scene {
            clear_color: theme().layer1,
            nodes: vec![],
        },
        hits: vec![],
        sems: vec![],
    };
    paint.walk(&root, (0.0, 0.0))?;

    // Hits stay in paint order, so children follow their parents.
    let Paint {
        scene, hits, sems, ..
    } = paint;
    log::trace!(
        "layout {}x{}: {} views, {} hit regions",
        size_px.0,
        size_px.1,
        nodes_map.len(),
        hits.len()
    );

    Ok((scene, hits, sems))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClickableText, Row, Text, TextExt, ViewExt};
    use homescreen_core::{Density, Modifier, Vec2, with_density};
    use homescreen_text::ELLIPSIS;

    fn texts(scene: &Scene) -> Vec<(String, Rect)> {
        scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text { text, rect, .. } => Some((text.clone(), *rect)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_weighted_text_takes_remaining_width() {
        let root = Row(Modifier::new().fill_max_width()).child((
            Text("left").modifier(Modifier::new().weight(1.0)),
            Text("right"),
        ));
        let (scene, _, sems) = layout_and_paint(&root, (300, 40)).expect("layout");
        let t = texts(&scene);
        assert_eq!(t.len(), 2);
        // "right": 5 graphemes at 16px
        let right_w = 5.0 * 16.0 * 0.6;
        assert!((t[0].1.w - (300.0 - right_w)).abs() < 0.5, "{t:?}");
        assert!((t[1].1.x - (300.0 - right_w)).abs() < 0.5, "{t:?}");
        assert_eq!(sems.len(), 2);
        assert!(sems.iter().all(|s| s.role == Role::Text));
    }

    #[test]
    fn test_max_lines_ellipsizes_last_line() {
        let long = "word ".repeat(60);
        let root = Row(Modifier::new()).child(
            Text(long.clone())
                .max_lines(2)
                .overflow_ellipsize()
                .modifier(Modifier::new().weight(1.0)),
        );
        let (scene, _, _) = layout_and_paint(&root, (200, 300)).expect("layout");
        let t = texts(&scene);
        assert_eq!(t.len(), 2, "{t:?}");
        assert!(t[1].0.ends_with(ELLIPSIS));
        for (line, rect) in &t {
            assert!(measure_width(line, 16.0) <= rect.w + 0.5);
        }
    }

    #[test]
    fn test_click_region_dispatches() {
        let hit = std::rc::Rc::new(std::cell::Cell::new(false));
        let root = Row(Modifier::new()).child((
            Text("title").modifier(Modifier::new().weight(1.0)),
            {
                let hit = hit.clone();
                ClickableText("go", Modifier::new(), move || hit.set(true))
            },
        ));
        let (scene, hits, sems) = layout_and_paint(&root, (200, 40)).expect("layout");
        assert_eq!(hits.len(), 1);
        let frame = homescreen_core::Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sems,
        };
        let target = frame.hit_regions[0].rect.center();
        assert!(frame.click_at(target));
        assert!(hit.get());
        assert!(!frame.click_at(Vec2 { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn test_padding_is_not_clickable() {
        let hit = std::rc::Rc::new(std::cell::Cell::new(0));
        let root = Row(Modifier::new()).child((
            Text("title").modifier(Modifier::new().weight(1.0)),
            {
                let hit = hit.clone();
                ClickableText("go", Modifier::new().padding_start(16.0), move || {
                    hit.set(hit.get() + 1)
                })
            },
        ));
        let (scene, hits, sems) = layout_and_paint(&root, (200, 40)).expect("layout");
        let label_x = 200.0 - 2.0 * 16.0 * 0.6;
        assert!((hits[0].rect.x - label_x).abs() < 0.5, "{:?}", hits[0].rect);
        let button = sems
            .iter()
            .find(|s| s.role == Role::Button)
            .expect("button node");
        assert_eq!(button.rect, hits[0].rect);

        let frame = homescreen_core::Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sems,
        };
        // Inside the 16px leading gap.
        assert!(!frame.click_at(Vec2 {
            x: label_x - 8.0,
            y: 20.0
        }));
        assert_eq!(hit.get(), 0);
        assert!(frame.click_at(Vec2 {
            x: label_x + 4.0,
            y: 20.0
        }));
        assert_eq!(hit.get(), 1);
    }

    #[test]
    fn test_padding_start_flips_in_rtl() {
        let build = || {
            Row(Modifier::new()).child(Text("ab").modifier(Modifier::new().padding_start(16.0)))
        };
        let (ltr, _, _) = layout_and_paint(&build(), (100, 20)).expect("layout");
        let (rtl, _, _) = homescreen_core::with_text_direction(TextDirection::Rtl, || {
            layout_and_paint(&build(), (100, 20))
        })
        .expect("layout");
        let ltr_x = texts(&ltr)[0].1.x;
        let rtl_x = texts(&rtl)[0].1.x;
        assert_eq!(ltr_x, 16.0);
        // RowReverse puts the child at the right edge; padding is on its right.
        let text_w = 2.0 * 16.0 * 0.6;
        assert!((rtl_x - (100.0 - 16.0 - text_w)).abs() < 0.5, "{rtl_x}");
    }

    #[test]
    fn test_density_scales_padding_and_font() {
        let root = Row(Modifier::new()).child(
            Text("a")
                .size(10.0)
                .modifier(Modifier::new().padding_start(8.0)),
        );
        let (scene, _, _) =
            with_density(Density { scale: 2.0 }, || layout_and_paint(&root, (200, 50)))
                .expect("layout");
        let node = scene
            .nodes
            .iter()
            .find_map(|n| match n {
                SceneNode::Text { rect, size, .. } => Some((*rect, *size)),
                _ => None,
            })
            .expect("text node");
        assert_eq!(node.0.x, 16.0);
        assert_eq!(node.1, 20.0);
    }
}
