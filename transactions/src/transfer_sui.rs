//! Transfer SUI: send native coin from the gas object.

use serde::{Deserialize, Serialize};
use suiwire_types::Address;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSui {
    pub recipient: Address,
    pub amount: u64,
}
