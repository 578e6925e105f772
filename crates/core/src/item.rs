//! Validated item name value object.

use core::str::FromStr;

use serde::Serialize;

use crate::error::StockError;

/// Name of a stock-keeping unit.
///
/// Always non-empty after trimming; construct through [`ItemName::new`] (or
/// `FromStr`) so the invariant holds everywhere the type appears. Serialized
/// transparently as a plain string, which is exactly the key format of the
/// persisted JSON object. Deserialization goes through [`ItemName::new`]
/// explicitly so invalid keys cannot sneak past validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, StockError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StockError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemName {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
