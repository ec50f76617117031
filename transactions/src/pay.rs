//! Pay transactions: split input coins across recipients.

use serde::{Deserialize, Serialize};
use suiwire_types::{Address, ObjectRef};

/// Pay arbitrary coins of one type. `recipients[i]` receives `amounts[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pay {
    pub coins: Vec<ObjectRef>,
    pub recipients: Vec<Address>,
    pub amounts: Vec<u64>,
}

/// Pay native coins. The first input coin also pays for gas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySui {
    pub coins: Vec<ObjectRef>,
    pub recipients: Vec<Address>,
    pub amounts: Vec<u64>,
}

/// Merge every input native coin and send the remainder after gas to one recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAllSui {
    pub coins: Vec<ObjectRef>,
    pub recipient: Address,
}

impl Pay {
    pub fn total(&self) -> Option<u64> {
        checked_sum(&self.amounts)
    }
}

impl PaySui {
    pub fn total(&self) -> Option<u64> {
        checked_sum(&self.amounts)
    }
}

fn checked_sum(amounts: &[u64]) -> Option<u64> {
    amounts.iter().try_fold(0u64, |acc, a| acc.checked_add(*a))
}
