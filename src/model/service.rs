//! Community service definitions.

use std::fmt;

/// Interaction style of a community service.
///
/// Modeled as a closed enum so an invalid category cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Post-and-reply board where members can message each other
    Chat,
    /// Question/answer style discussion board
    Forum,
    /// Curated partner offers
    Deals,
}

impl ServiceKind {
    /// Short lowercase identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Forum => "forum",
            Self::Deals => "deals",
        }
    }

    /// Human-readable display name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Forum => "Forum",
            Self::Deals => "Deals",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A selectable community offering.
///
/// Services are defined at process start from a static table, are
/// immutable, and are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Unique identifier (e.g. "accommodations")
    pub id: &'static str,
    /// Display title (e.g. "Accommodations")
    pub title: &'static str,
    /// One-line description shown in the directory
    pub description: &'static str,
    /// Interaction style
    pub kind: ServiceKind,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
