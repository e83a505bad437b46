//! Declarative storyboards for a downstream renderer.
//!
//! A [`Storyboard`] lists the objects of a scene and the ordered play/wait steps that drive
//! them. Nothing here interpolates, lays out text or renders; durations are declared, not
//! simulated.

mod builder;
mod explainer;
mod model;

pub use builder::StoryboardBuilder;
pub use explainer::{StoryboardOpts, sparse_vs_dense};
pub use model::{
    Animation, CellsObject, Direction, Highlight, Placement, SceneObject, Square, Step,
    Storyboard, TextObject,
};
