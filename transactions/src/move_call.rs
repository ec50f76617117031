//! Move call: invoke a function in a published package.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use suiwire_types::{MoveModule, ObjectId};

/// A Move function call.
///
/// Type arguments and call arguments are left as raw JSON; their shape
/// depends on the called function's signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    #[serde(rename = "typeArguments", default)]
    pub type_arguments: Vec<Value>,
    #[serde(default)]
    pub arguments: Vec<Value>,
}

impl MoveCall {
    /// The module this call targets.
    pub fn target_module(&self) -> MoveModule {
        MoveModule::new(self.package, self.module.clone())
    }

    /// `package::module::function` with the package in short form.
    pub fn target(&self) -> String {
        format!("{}::{}", self.target_module(), self.function)
    }
}
