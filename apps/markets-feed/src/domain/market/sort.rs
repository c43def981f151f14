//! Sort policy for the produced record list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordering applied to the surviving record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Descending by signed percent change.
    Change,
    /// Descending by magnitude of percent change.
    AbsoluteChange,
    /// Keep provider/input order.
    #[default]
    InputOrder,
}

impl SortPolicy {
    /// Parse a policy label, normalizing unknown values to input order.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "change" => Self::Change,
            "absolute-change" => Self::AbsoluteChange,
            _ => Self::InputOrder,
        }
    }

    /// The policy label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::AbsoluteChange => "absolute-change",
            Self::InputOrder => "input-order",
        }
    }
}

impl Serialize for SortPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_or_default(&raw))
    }
}
