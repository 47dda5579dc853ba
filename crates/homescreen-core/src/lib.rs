//! # View model, locals and signals
//!
//! The home screen is built from plain functions that return a `View` tree.
//! Nothing in the tree is mutated after it is built; when inputs change the
//! function runs again and produces a new tree.
//!
//! - `View` / `ViewKind` / `Modifier`: what to draw and how to size it.
//! - Locals (`theme()`, `typography()`, `density()`, …): render-time
//!   parameters provided for a subtree with `with_*` helpers.
//! - `Signal<T>`: observable value; `subscribe` to be told about writes.
//! - `Scheduler` / `Frame`: one composition pass and its painted output,
//!   hit regions and semantics.
//!
//! ```rust
//! use homescreen_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```

pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod tests;
pub mod view;

pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;
