//! The errors of the side menu.
//!
//! Every variant is a programming error: a bad configuration value or a
//! wiring defect between the side menu and its host. None of them are
//! retried; they are surfaced to the caller as soon as they are detected.
use crate::surface;

use std::fmt;

/// An error produced by the side menu.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A configuration value violates its numeric invariant.
    #[error("invalid `{field}` value ({value}): {reason}")]
    InvalidConfiguration {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// What the value must satisfy.
        reason: &'static str,
    },

    /// A collaborator needed by the operation has not been set.
    #[error("the {0} is not set")]
    MissingCollaborator(Collaborator),

    /// A surface was passed where a surface of another kind was required.
    #[error("unexpected surface type: expected {expected}, found {found}")]
    UnexpectedSurfaceType {
        /// The kind of surface the operation requires.
        expected: surface::Kind,
        /// The kind of surface that was provided.
        found: surface::Kind,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}

/// A collaborator the side menu cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// The container surface hosting the menu and its content.
    Container,
    /// The menu surface.
    Menu,
    /// The currently embedded content surface.
    Content,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collaborator::Container => "container surface",
            Collaborator::Menu => "menu surface",
            Collaborator::Content => "content surface",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = Error::invalid("duration", -1.0, "it must be non negative");
        assert_eq!(
            error.to_string(),
            "invalid `duration` value (-1): it must be non negative"
        );

        let error = Error::MissingCollaborator(Collaborator::Menu);
        assert_eq!(error.to_string(), "the menu surface is not set");

        let error = Error::UnexpectedSurfaceType {
            expected: surface::Kind::Menu,
            found: surface::Kind::Content,
        };
        assert_eq!(
            error.to_string(),
            "unexpected surface type: expected menu, found content"
        );
    }
}
