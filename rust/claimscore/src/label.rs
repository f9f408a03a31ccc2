//! Claim labels and the scored categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The verdict attached to a claim, either by the gold annotation or by the
/// label-prediction stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Support,
    Contradict,
    NotEnoughInfo,
}

impl Label {
    /// The scored category for this label. `NOT_ENOUGH_INFO` carries no
    /// directional evidence and is never scored.
    pub fn category(self) -> Option<Category> {
        match self {
            Label::Support => Some(Category::Support),
            Label::Contradict => Some(Category::Contradict),
            Label::NotEnoughInfo => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Support => "SUPPORT",
            Label::Contradict => "CONTRADICT",
            Label::NotEnoughInfo => "NOT_ENOUGH_INFO",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label with directional evidence. Macro-F1 averages over exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Support,
    Contradict,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Support, Category::Contradict];

    pub fn label(self) -> Label {
        match self {
            Category::Support => Label::Support,
            Category::Contradict => Label::Contradict,
        }
    }

    /// Whether a tuple carrying `label` belongs to this category.
    pub fn includes(self, label: Label) -> bool {
        label.category() == Some(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.label(), f)
    }
}
