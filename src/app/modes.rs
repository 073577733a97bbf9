//! Listing view and dropdown mode types.
//!
//! The listing page is served as one of three statically rendered views. The
//! view is chosen by route, never by query parameter, so switching views keeps
//! the current filter query string attached to the link.
//!
//! # Example
//!
//! ```rust
//! use events_filter::app::modes::{DropdownKind, ViewMode};
//!
//! assert_eq!(ViewMode::Compact.path("/events"), "/events/compact");
//! assert!(DropdownKind::Topics.is_multiple());
//! ```

use crate::domain::FilterField;

/// Listing layout, each served from its own route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Card grid, served at the base path.
    #[default]
    Grid,
    /// Dense single-column list.
    Compact,
    /// Poster-first gallery.
    Gallery,
}

impl ViewMode {
    /// All views in selector order.
    pub const ALL: [Self; 3] = [Self::Grid, Self::Compact, Self::Gallery];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Compact => "compact",
            Self::Gallery => "gallery",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Compact => "Compact",
            Self::Gallery => "Gallery",
        }
    }

    /// Parses a view name, returning `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == name)
    }

    /// Route for this view under `base_path` (trailing slashes ignored).
    #[must_use]
    pub fn path(self, base_path: &str) -> String {
        let base = base_path.trim_end_matches('/');
        match self {
            Self::Grid if base.is_empty() => "/".to_string(),
            Self::Grid => base.to_string(),
            other => format!("{base}/{}", other.as_str()),
        }
    }
}

/// Which criteria field a dropdown edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownKind {
    /// Multi-select over topics (checkboxes, stays open).
    Topics,
    /// Single-select over locations (radios, closes on choice).
    Location,
}

impl DropdownKind {
    #[must_use]
    pub const fn is_multiple(self) -> bool {
        matches!(self, Self::Topics)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Topics => "Topics",
            Self::Location => "Location",
        }
    }

    #[must_use]
    pub const fn field(self) -> FilterField {
        match self {
            Self::Topics => FilterField::Topics,
            Self::Location => FilterField::Location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_paths() {
        assert_eq!(ViewMode::Grid.path("/events"), "/events");
        assert_eq!(ViewMode::Gallery.path("/events/"), "/events/gallery");
        assert_eq!(ViewMode::Grid.path("/"), "/");
        assert_eq!(ViewMode::Compact.path(""), "/compact");
    }

    #[test]
    fn test_view_names() {
        assert_eq!(ViewMode::from_name("gallery"), Some(ViewMode::Gallery));
        assert_eq!(ViewMode::from_name("list"), None);
    }
}
