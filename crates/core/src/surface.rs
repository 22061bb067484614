//! Identify the visual surfaces managed by the side menu.
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{self, AtomicU64};

/// The id of a visual surface owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Creates a new unique surface [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The role a surface plays in the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The surface hosting everything else.
    Container,
    /// The side menu itself.
    Menu,
    /// A content surface selectable from the menu.
    Content,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Container => "container",
            Kind::Menu => "menu",
            Kind::Content => "content",
        })
    }
}

/// A surface handed to the side menu by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Surface {
    /// The [`Id`] of the surface.
    pub id: Id,
    /// The [`Kind`] of the surface.
    pub kind: Kind,
}

impl Surface {
    /// Creates a new [`Surface`] with a unique [`Id`].
    pub fn new(kind: Kind) -> Self {
        Self {
            id: Id::unique(),
            kind,
        }
    }

    /// Creates a new menu [`Surface`].
    pub fn menu() -> Self {
        Self::new(Kind::Menu)
    }

    /// Creates a new content [`Surface`].
    pub fn content() -> Self {
        Self::new(Kind::Content)
    }

    /// Creates a new container [`Surface`].
    pub fn container() -> Self {
        Self::new(Kind::Container)
    }

    /// Returns an error unless the surface is of the given [`Kind`].
    pub fn expect_kind(self, expected: Kind) -> Result<Self, crate::Error> {
        if self.kind == expected {
            Ok(self)
        } else {
            Err(crate::Error::UnexpectedSurfaceType {
                expected,
                found: self.kind,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let a = Id::unique();
        let b = Id::unique();
        assert_ne!(a, b);
    }

    #[test]
    fn test_expect_kind() {
        let menu = Surface::menu();
        assert_eq!(menu.expect_kind(Kind::Menu), Ok(menu));

        let content = Surface::content();
        assert_eq!(
            content.expect_kind(Kind::Menu),
            Err(crate::Error::UnexpectedSurfaceType {
                expected: Kind::Menu,
                found: Kind::Content,
            })
        );
    }
}
