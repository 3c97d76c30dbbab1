// src/model/mod.rs
mod item;
mod items;

pub use item::{Item, Property};
pub use items::{Ancestors, Items};

use crate::types::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two object kinds the cache holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Page,
    Database,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Page => "page",
            ObjectKind::Database => "database",
        }
    }
}

impl std::str::FromStr for ObjectKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(ObjectKind::Page),
            "database" => Ok(ObjectKind::Database),
            other => Err(ValidationError::UnrecognizedKind(other.to_string())),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
