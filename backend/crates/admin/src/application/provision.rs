//! Account provisioning
//!
//! Seeds the account store at startup: the `admin`/`admin` development pair
//! (debug builds only) and the production account from the environment.

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::services::hash_password;
use crate::domain::value_object::{admin_password::AdminPassword, admin_role::AdminRole};
use crate::error::{AdminError, AdminResult};

pub const DEV_USERNAME: &str = "admin";
pub const DEV_PASSWORD: &str = "admin";

/// Account created from configuration (e.g. `ADMIN_USERNAME`/`ADMIN_PASSWORD`)
#[derive(Debug)]
pub struct BootstrapAccount {
    pub username: String,
    pub password: AdminPassword,
    pub role: AdminRole,
}

pub struct ProvisionAccountsUseCase<R>
where
    R: AdminAccountRepository,
{
    account_repo: Arc<R>,
    config: Arc<AdminConfig>,
}

impl<R> ProvisionAccountsUseCase<R>
where
    R: AdminAccountRepository,
{
    pub fn new(account_repo: Arc<R>, config: Arc<AdminConfig>) -> Self {
        Self {
            account_repo,
            config,
        }
    }

    /// Returns the number of accounts written
    pub async fn execute(&self, bootstrap: Option<BootstrapAccount>) -> AdminResult<usize> {
        let mut written = 0;

        if self.config.seed_development_account {
            let hash = hash_password(
                &AdminPassword::new(DEV_PASSWORD),
                None,
                &self.config.server_secret,
            );
            self.account_repo
                .upsert(&AdminAccount::new(DEV_USERNAME, hash, AdminRole::SuperAdmin))
                .await?;
            written += 1;
            tracing::warn!(
                username = DEV_USERNAME,
                "Development admin account enabled; do not use in production"
            );
        }

        if let Some(account) = bootstrap {
            let username = account.username.trim();
            if username.is_empty() || account.password.is_blank() {
                return Err(AdminError::InvalidRequest(
                    "Bootstrap admin account needs a username and password".to_string(),
                ));
            }
            let hash = hash_password(&account.password, None, &self.config.server_secret);
            self.account_repo
                .upsert(&AdminAccount::new(username, hash, account.role))
                .await?;
            written += 1;
            tracing::info!(username = %username, role = %account.role, "Admin account provisioned");
        }

        Ok(written)
    }
}
