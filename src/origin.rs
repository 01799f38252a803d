use std::fmt;

use crate::Role;

/// Provenance of an envelope, picked from the role of the participant that
/// raised it.
///
/// Receivers match on it when they care who asked:
///
/// ```rust,ignore
/// match envelope.origin() {
///     Origin::View => self.refresh_selection(),
///     Origin::Model => self.reload(),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    Model,
    Controller,
    View,
    Generic,
    /// Envelope built from missing or blank input. Never valid.
    #[default]
    Null,
}

impl Origin {
    pub fn is_model(&self) -> bool {
        matches!(self, Origin::Model)
    }

    pub fn is_controller(&self) -> bool {
        matches!(self, Origin::Controller)
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Origin::View)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Origin::Null)
    }
}

impl From<Role> for Origin {
    fn from(role: Role) -> Self {
        match role {
            Role::Model => Origin::Model,
            Role::Controller => Origin::Controller,
            Role::View => Origin::View,
            Role::Other => Origin::Generic,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Model => write!(f, "Model"),
            Origin::Controller => write!(f, "Controller"),
            Origin::View => write!(f, "View"),
            Origin::Generic => write!(f, "Generic"),
            Origin::Null => write!(f, "Null"),
        }
    }
}
