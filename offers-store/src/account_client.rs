use std::collections::HashMap;

use async_trait::async_trait;
use offers_core::{AccountStatusClient, CoreResult};
use offers_shared::AccountStatus;

use crate::app_config::AccountsConfig;

/// Account status lookup served from configuration
#[derive(Debug, Clone, Default)]
pub struct StaticAccountStatusClient {
    default_status: AccountStatus,
    overrides: HashMap<String, AccountStatus>,
}

impl StaticAccountStatusClient {
    pub fn new(default_status: AccountStatus, overrides: HashMap<String, AccountStatus>) -> Self {
        Self {
            default_status,
            overrides,
        }
    }

    pub fn from_config(config: &AccountsConfig) -> Self {
        Self::new(config.default_status, config.overrides.clone())
    }
}

#[async_trait]
impl AccountStatusClient for StaticAccountStatusClient {
    async fn get_account_status(&self, account_id: &str) -> CoreResult<AccountStatus> {
        Ok(self
            .overrides
            .get(account_id)
            .copied()
            .unwrap_or(self.default_status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_override_then_default() {
        let config = AccountsConfig {
            default_status: AccountStatus::ToActivate,
            overrides: HashMap::from([("seller1".to_string(), AccountStatus::Active)]),
        };
        let client = StaticAccountStatusClient::from_config(&config);

        assert_eq!(client.get_account_status("seller1").await.unwrap(), AccountStatus::Active);
        assert_eq!(client.get_account_status("other").await.unwrap(), AccountStatus::ToActivate);
    }
}
