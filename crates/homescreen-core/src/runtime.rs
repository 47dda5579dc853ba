use crate::{Callback, Rect, Scene, Vec2, View, semantics::Role};

/// Output of composition for a tick: scene + input/semantics.
#[derive(Clone, Default)]
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub on_click: Option<Callback>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Flattened semantics node produced by layout and paint.
///
/// This is the source of truth for accessibility backends: it contains the
/// resolved screen rect, role, label, and focus/enabled state.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
    pub focused: bool,
    pub enabled: bool,
}

impl Frame {
    /// Topmost region under `p`. Regions are in paint order, last on top.
    pub fn hit_test(&self, p: Vec2) -> Option<&HitRegion> {
        self.hit_regions.iter().rev().find(|h| h.rect.contains(p))
    }

    /// Runs the click handler under `p`; `false` when nothing handled it.
    pub fn click_at(&self, p: Vec2) -> bool {
        match self.hit_test(p).and_then(|h| h.on_click.clone()) {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    pub fn clickable_regions(&self) -> impl Iterator<Item = &HitRegion> {
        self.hit_regions.iter().filter(|h| h.on_click.is_some())
    }

    pub fn semantics_with_role(&self, role: Role) -> impl Iterator<Item = &SemNode> {
        self.semantics_nodes.iter().filter(move |n| n.role == role)
    }
}

pub struct Scheduler {
    pub size: (u32, u32),
    frames: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            size: (360, 640),
            frames: 0,
        }
    }

    /// Number of frames composed so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Build the root view, then lay it out and paint it.
    pub fn compose<F, E>(
        &mut self,
        build_root: F,
        layout_paint: impl Fn(&View, (u32, u32)) -> Result<(Scene, Vec<HitRegion>, Vec<SemNode>), E>,
    ) -> Result<Frame, E>
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        let root = build_root(self);
        let (scene, hit_regions, semantics_nodes) = layout_paint(&root, self.size)?;
        self.frames += 1;
        log::trace!(
            "frame {}: {} scene nodes, {} hit regions",
            self.frames,
            scene.nodes.len(),
            hit_regions.len()
        );
        Ok(Frame {
            scene,
            hit_regions,
            semantics_nodes,
        })
    }
}
