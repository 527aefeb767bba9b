//! Menu item category.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category tag for a menu item.
///
/// The menu knows exactly two sections. Anything that is not recognizably
/// `"sweets"` - including typos, stale values hand-edited into a data file,
/// and a missing field - lands in the daily platters section rather than
/// failing, so the public menu always renders every item under one of the
/// two headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Sweets,
    #[default]
    DailyPlatters,
}

impl Category {
    /// Canonical tag for the sweets section.
    pub const SWEETS: &'static str = "sweets";

    /// Canonical tag for the daily platters section.
    pub const DAILY_PLATTERS: &'static str = "daily-platters";

    /// Normalize a raw category value.
    ///
    /// Trims and lowercases, then maps exactly `"sweets"` to
    /// [`Category::Sweets`] and everything else to
    /// [`Category::DailyPlatters`].
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(Self::SWEETS) {
            Self::Sweets
        } else {
            Self::DailyPlatters
        }
    }

    /// Returns the canonical wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sweets => Self::SWEETS,
            Self::DailyPlatters => Self::DAILY_PLATTERS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Deserialization normalizes instead of erroring so that collections written
// by earlier versions (or edited by hand) still read back canonical.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
