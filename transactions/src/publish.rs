//! Publish: upload a package of compiled Move modules.

use serde::{Deserialize, Serialize};
use suiwire_types::Base64Data;

/// A module publish. Each entry is one compiled module, base64 on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePublish {
    pub modules: Vec<Base64Data>,
}

impl ModulePublish {
    /// Total bytecode size across all modules.
    pub fn bytecode_len(&self) -> usize {
        self.modules.iter().map(Base64Data::len).sum()
    }
}
