use core::str::FromStr;
use serde::{Deserialize, Serialize};

use pizzeria_core::DomainError;

use crate::catalog::{BeijingCatalog, ClassicCatalog, FamilyCatalog, LondonCatalog};

/// A product family: every pizza built for a region carries its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Beijing,
    London,
    /// The single region-less menu of the plain shop.
    Classic,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Beijing, Region::London, Region::Classic];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Beijing => "Beijing",
            Region::London => "London",
            Region::Classic => "Classic",
        }
    }

    /// The one catalog serving this region.
    pub fn catalog(self) -> &'static dyn FamilyCatalog {
        match self {
            Region::Beijing => &BeijingCatalog,
            Region::London => &LondonCatalog,
            Region::Classic => &ClassicCatalog,
        }
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses configuration text. Unlike type tokens, region names are matched
/// case-insensitively and accept the short shop codes.
impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beijing" | "bj" => Ok(Region::Beijing),
            "london" | "ld" => Ok(Region::London),
            "classic" => Ok(Region::Classic),
            other => Err(DomainError::validation(format!(
                "unknown region {other:?} (expected one of: beijing, london, classic)"
            ))),
        }
    }
}

/// Opaque key naming the requested variant, e.g. `"cheese"`.
///
/// Tokens are compared exactly as given: `"Cheese"` is not `"cheese"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeToken(String);

impl TypeToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for TypeToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TypeToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TypeToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
