//! Repository Traits
//!
//! Interfaces for account persistence. Implementation is in the infra layer.

use crate::domain::entity::admin_account::AdminAccount;
use crate::error::AdminResult;

/// Admin account repository trait
#[trait_variant::make(AdminAccountRepository: Send)]
pub trait LocalAdminAccountRepository {
    /// Find account by exact username
    async fn find_by_username(&self, username: &str) -> AdminResult<Option<AdminAccount>>;

    /// Insert or replace the account with the same username
    async fn upsert(&self, account: &AdminAccount) -> AdminResult<()>;

    /// Number of stored accounts
    async fn count(&self) -> AdminResult<usize>;
}
