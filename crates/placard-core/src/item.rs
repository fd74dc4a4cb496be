//! Logical card descriptions.
//!
//! A layout request names *what* should be placed, not where. Each entry is
//! an [`Item`]: a shape category plus an optional explicit size. When no
//! explicit size is given, the [`ItemKind`] lookup table supplies nominal
//! dimensions, so a missing size is never an error.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Shape category of a card, used to resolve default dimensions.
///
/// The mapping from kind to nominal size is fixed; callers that need other
/// dimensions supply an explicit [`Size`] on the [`Item`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A square card, 220 x 220
    Square,
    /// A wide card, 240 x 140
    Rectangle,
    /// The fallback card shape, 180 x 100
    #[default]
    Default,
}

impl ItemKind {
    /// Returns the nominal dimensions for this kind of card.
    ///
    /// Every nominal size fits inside the default 250-unit search steps and
    /// 300-unit grid cells with the default 50-unit padding to spare, so
    /// kind-sized cards laid out on the default lattice never conflict.
    pub fn nominal_size(self) -> Size {
        match self {
            ItemKind::Square => Size::new(220.0, 220.0),
            ItemKind::Rectangle => Size::new(240.0, 140.0),
            ItemKind::Default => Size::new(180.0, 100.0),
        }
    }
}

/// A logical item to be placed by a layout calculator.
///
/// The engine resolves the effective size via [`Item::resolved_size`]:
/// an explicit size always wins over the kind's nominal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Shape category, used when no explicit size is given
    #[serde(default)]
    pub kind: ItemKind,

    /// Explicit dimensions overriding the kind lookup
    #[serde(default)]
    pub size: Option<Size>,
}

impl Item {
    /// Creates an item of the given kind with no explicit size
    pub fn of_kind(kind: ItemKind) -> Self {
        Self { kind, size: None }
    }

    /// Creates an item with explicit dimensions
    pub fn with_size(size: Size) -> Self {
        Self {
            kind: ItemKind::Default,
            size: Some(size),
        }
    }

    /// Returns the effective dimensions of this item
    pub fn resolved_size(self) -> Size {
        self.size.unwrap_or_else(|| self.kind.nominal_size())
    }
}
