//! The visual updates requested from the host.
//!
//! The side menu never touches the view hierarchy itself. Every change is
//! expressed as a [`Command`] pushed into the [`Shell`], and the host
//! applies the commands in order.
//!
//! [`Shell`]: crate::Shell
use crate::geometry::Transform;
use crate::item_options::Shadow;
use crate::surface;

use bitflags::bitflags;

/// Where a surface is inserted in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Directly below the given surface.
    Below(surface::Id),
    /// Above every other surface.
    Top,
    /// Above every other surface, filling the container.
    Fill,
}

bitflags! {
    /// The gesture recognizers attached to a surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gestures: u8 {
        /// A horizontal pan that dismisses the menu.
        const PAN = 1 << 0;
        /// A tap that dismisses the menu.
        const TAP = 1 << 1;
    }
}

/// A visual update requested from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a surface into the container.
    Insert {
        /// The surface to insert.
        surface: surface::Id,
        /// Where to insert it.
        placement: Placement,
    },
    /// Remove a surface from the container.
    Remove(surface::Id),
    /// Capture the current appearance of a surface into another one.
    Snapshot {
        /// The surface to capture.
        of: surface::Id,
        /// The surface receiving the captured image.
        into: surface::Id,
    },
    /// Hide or show a surface.
    SetHidden {
        /// The affected surface.
        surface: surface::Id,
        /// Whether the surface is hidden.
        hidden: bool,
    },
    /// Enable or disable user interaction on a surface.
    SetInteractive {
        /// The affected surface.
        surface: surface::Id,
        /// Whether the surface receives input.
        interactive: bool,
    },
    /// Apply a scale and translation to a surface.
    SetTransform {
        /// The affected surface.
        surface: surface::Id,
        /// The new transform.
        transform: Transform,
    },
    /// Set or clear the drop shadow of a surface.
    SetShadow {
        /// The affected surface.
        surface: surface::Id,
        /// The shadow, if any.
        shadow: Option<Shadow>,
    },
    /// Set the corner radius of a surface.
    SetCornerRadius {
        /// The affected surface.
        surface: surface::Id,
        /// The corner radius.
        radius: f32,
    },
    /// Attach the recognizers that dismiss the menu to a surface.
    AttachGestures {
        /// The affected surface.
        surface: surface::Id,
        /// The recognizers to attach.
        gestures: Gestures,
    },
    /// Detach the recognizers that dismiss the menu from a surface.
    DetachGestures {
        /// The affected surface.
        surface: surface::Id,
        /// The recognizers to detach.
        gestures: Gestures,
    },
}

impl Command {
    /// Returns the surface the [`Command`] applies to.
    pub fn surface(&self) -> surface::Id {
        match self {
            Command::Insert { surface, .. }
            | Command::SetHidden { surface, .. }
            | Command::SetInteractive { surface, .. }
            | Command::SetTransform { surface, .. }
            | Command::SetShadow { surface, .. }
            | Command::SetCornerRadius { surface, .. }
            | Command::AttachGestures { surface, .. }
            | Command::DetachGestures { surface, .. } => *surface,
            Command::Remove(surface) => *surface,
            Command::Snapshot { into, .. } => *into,
        }
    }

    /// Returns the transform, if the [`Command`] is a
    /// [`Command::SetTransform`].
    pub fn transform(&self) -> Option<Transform> {
        match self {
            Command::SetTransform { transform, .. } => Some(*transform),
            _ => None,
        }
    }
}
