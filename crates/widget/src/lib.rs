//! The interactive side menu of icy_side_menu.
//!
//! A [`SideMenu`] slides its content aside to reveal a menu underneath,
//! either following a horizontal pan or on request. While open, the content
//! is replaced by a scaled snapshot that can be dragged or tapped to close
//! the menu again.
//!
//! The side menu is headless: it turns gestures and ticks into
//! [`Command`]s, and the host applies them to its own views.
//!
//! [`Command`]: core::Command
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_side_menu_core as core;

pub mod animation;
pub mod handle;
pub mod pan;
pub mod registry;
pub mod side_menu;
pub mod transition;

pub use handle::{MenuCapable, MenuHandle};
pub use pan::PanTracker;
pub use registry::Registry;
pub use side_menu::SideMenu;
pub use transition::InteractiveTransition;
