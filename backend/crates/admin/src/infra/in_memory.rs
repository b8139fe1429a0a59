//! In-memory admin account store
//!
//! Accounts are provisioned at startup and lost on restart.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::error::AdminResult;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAdminRepository {
    accounts: Arc<RwLock<HashMap<String, AdminAccount>>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdminAccountRepository for InMemoryAdminRepository {
    async fn find_by_username(&self, username: &str) -> AdminResult<Option<AdminAccount>> {
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn upsert(&self, account: &AdminAccount) -> AdminResult<()> {
        self.accounts
            .write()
            .await
            .insert(account.username.clone(), account.clone());
        Ok(())
    }

    async fn count(&self) -> AdminResult<usize> {
        Ok(self.accounts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::hash_password;
    use crate::domain::value_object::{admin_password::AdminPassword, admin_role::AdminRole};

    #[tokio::test]
    async fn test_upsert_replaces_by_username() {
        let repo = InMemoryAdminRepository::new();
        let hash = hash_password(&AdminPassword::new("pw"), None, b"k");

        let mut account = AdminAccount::new("alice", hash, AdminRole::Editor);
        repo.upsert(&account).await.unwrap();
        account.role = AdminRole::Admin;
        repo.upsert(&account).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.role, AdminRole::Admin);
        assert!(repo.find_by_username("Alice").await.unwrap().is_none());
    }
}
