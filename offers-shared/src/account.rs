use serde::{Deserialize, Serialize};

/// Status of a seller account as reported by the account service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    ToActivate,
    Blocked,
    #[default]
    Active,
    Suspended,
    Archived,
}

impl AccountStatus {
    /// Only active accounts may publish offers
    pub fn can_publish(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_can_publish() {
        assert!(AccountStatus::Active.can_publish());
        for status in [
            AccountStatus::ToActivate,
            AccountStatus::Blocked,
            AccountStatus::Suspended,
            AccountStatus::Archived,
        ] {
            assert!(!status.can_publish(), "{:?} must not publish", status);
        }
    }

    #[test]
    fn test_wire_names() {
        let status: AccountStatus = serde_json::from_str("\"TO_ACTIVATE\"").unwrap();
        assert_eq!(status, AccountStatus::ToActivate);
    }
}
