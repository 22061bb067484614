//! An interactive, gesture-driven side menu.
//!
//! The menu lives underneath the content. Opening it slides the content to
//! the side and shrinks it, leaving a strip of it visible that can be tapped
//! or dragged back to close the menu again. Transitions follow the finger
//! while dragging and settle with a spring once released.
//!
//! `icy_side_menu` does not render anything. A [`SideMenu`] consumes gesture
//! samples and frame ticks, and describes every visual change as a
//! [`Command`] collected in a [`Shell`]. The host applies the commands to its
//! own views, in order.
//!
//! # Usage
//!
//! ```
//! use icy_side_menu::registry::Item;
//! use icy_side_menu::time::Instant;
//! use icy_side_menu::{MenuState, Shell, SideMenu, Size, Surface};
//!
//! # fn main() -> Result<(), icy_side_menu::Error> {
//! let mut side_menu = SideMenu::new();
//! side_menu.set_collaborators(Surface::container(), Size::new(390.0, 844.0), Surface::menu())?;
//!
//! let inbox = side_menu.registry_mut().push(Item::new("Inbox", Surface::content()));
//!
//! let mut commands = Vec::new();
//! side_menu.select_content(inbox, &mut Shell::new(&mut commands))?;
//!
//! side_menu.open()?;
//! assert_eq!(side_menu.state(), MenuState::Opening);
//!
//! // Once per frame
//! let mut commands = Vec::new();
//! side_menu.tick(Instant::now(), &mut Shell::new(&mut commands))?;
//! assert!(!commands.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Gestures are fed through [`SideMenu::edge_drag`] and
//! [`SideMenu::content_drag`], either straight from the recognizers of the
//! host or through a [`PanTracker`] for raw pointer events.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_side_menu_core as core;
pub use icy_side_menu_widget as widget;

pub use crate::core::command;
pub use crate::core::error;
pub use crate::core::geometry;
pub use crate::core::gesture;
pub use crate::core::item_options;
pub use crate::core::lifecycle;
pub use crate::core::loader;
pub use crate::core::options;
pub use crate::core::surface;
pub use crate::core::time;

pub use crate::widget::animation;
pub use crate::widget::handle;
pub use crate::widget::pan;
pub use crate::widget::registry;
pub use crate::widget::transition;

pub use crate::core::{
    Collaborator, Color, Command, Direction, Easing, Error, Gestures, ItemOptions, MenuState,
    Phase, Placement, RedrawRequest, Sample, Shadow, Shell, Size, SpringParams, SpringSettings,
    Surface, Transform, TransitionOptions, Vector,
};
pub use crate::widget::{
    InteractiveTransition, MenuCapable, MenuHandle, PanTracker, Registry, SideMenu,
};
