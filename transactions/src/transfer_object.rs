//! Transfer object: hand an owned object to another address.

use serde::{Deserialize, Serialize};
use suiwire_types::{Address, ObjectRef};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferObject {
    pub recipient: Address,
    pub object_ref: ObjectRef,
}
