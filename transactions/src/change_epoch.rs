//! Change epoch: system transaction closing an epoch.

use serde::{Deserialize, Serialize};
use suiwire_types::deserialize_u64;

/// Emitted by validators at epoch boundaries; clients only ever read it.
///
/// The epoch number arrives either as a JSON number or as a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEpoch {
    #[serde(deserialize_with = "deserialize_u64")]
    pub epoch: u64,
    pub storage_charge: u64,
    pub computation_charge: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_accepts_number_and_string() {
        let from_number: ChangeEpoch = serde_json::from_str(
            r#"{"epoch": 12, "storage_charge": 1, "computation_charge": 2}"#,
        )
        .unwrap();
        let from_string: ChangeEpoch = serde_json::from_str(
            r#"{"epoch": "12", "storage_charge": 1, "computation_charge": 2}"#,
        )
        .unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_string.epoch, 12);
        assert!(serde_json::to_string(&from_string)
            .unwrap()
            .contains(r#""epoch":12"#));
    }

    #[test]
    fn epoch_rejects_non_numeric_string() {
        let result = serde_json::from_str::<ChangeEpoch>(
            r#"{"epoch": "twelve", "storage_charge": 1, "computation_charge": 2}"#,
        );
        assert!(result.is_err());
    }
}
