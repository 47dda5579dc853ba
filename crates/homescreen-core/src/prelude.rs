pub use crate::color::Color;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::locals::{
    Density, Dp, TextDirection, TextScale, TextStyle, Theme, ThemeVariant, Typography, density,
    dp_to_px, sp_to_px, text_direction, text_scale, theme, typography, with_density,
    with_text_direction, with_text_scale, with_theme, with_typography,
};
pub use crate::modifier::{Modifier, VerticalAlign};
pub use crate::runtime::{Frame, HitRegion, Scheduler, SemNode};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, SubId, signal};
pub use crate::state::StateHolder;
pub use crate::view::{Callback, Scene, SceneNode, TextOverflow, View, ViewId, ViewKind};
pub use taffy::{AlignItems, AlignSelf};
