//! The core types of icy_side_menu.
//!
//! This crate contains the renderer-agnostic vocabulary shared by the side
//! menu: transition [`options`], the menu [`lifecycle`], [`gesture`] samples,
//! visual [`surface`] identities, and the [`Command`]s a host applies to its
//! view hierarchy.
//!
//! Nothing here renders. The host owns the real views and interprets the
//! commands collected in a [`Shell`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod command;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod item_options;
pub mod lifecycle;
pub mod loader;
pub mod options;
mod shell;
pub mod surface;
pub mod time;

pub use command::{Command, Gestures, Placement};
pub use error::{Collaborator, Error};
pub use geometry::{Size, Transform, Vector};
pub use gesture::{Direction, Phase, Sample};
pub use item_options::{Color, ItemOptions, Shadow};
pub use lifecycle::{Lifecycle, MenuState};
pub use options::{Easing, SpringParams, SpringSettings, TransitionOptions};
pub use shell::{RedrawRequest, Shell};
pub use surface::Surface;
