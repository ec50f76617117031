//! Move module identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::ObjectId;

/// A module inside a published package.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveModule {
    pub package: ObjectId,
    pub module: String,
}

impl MoveModule {
    pub fn new(package: ObjectId, module: impl Into<String>) -> Self {
        Self {
            package,
            module: module.into(),
        }
    }
}

/// Renders as `0x2::coin`.
impl fmt::Display for MoveModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.package.short_string(), self.module)
    }
}
