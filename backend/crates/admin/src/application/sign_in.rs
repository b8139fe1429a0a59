//! Sign In Use Case
//!
//! Checks credentials and issues a signed session token.

use std::sync::Arc;

use chrono::Utc;
use platform::rate_limit::RateLimitStore;

use crate::application::config::AdminConfig;
use crate::domain::entity::admin_session::AdminSession;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::services::verify_hash;
use crate::domain::token::SessionTokenCodec;
use crate::domain::value_object::admin_password::AdminPassword;
use crate::error::{AdminError, AdminResult};

/// Sign in input
#[derive(Debug)]
pub struct SignInInput {
    pub username: String,
    pub password: AdminPassword,
    /// Rate-limit key (client IP)
    pub client_key: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub session: AdminSession,
    /// Value for the session cookie
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R, L>
where
    R: AdminAccountRepository,
    L: RateLimitStore,
{
    account_repo: Arc<R>,
    rate_limiter: Arc<L>,
    codec: SessionTokenCodec,
    config: Arc<AdminConfig>,
}

impl<R, L> SignInUseCase<R, L>
where
    R: AdminAccountRepository,
    L: RateLimitStore,
{
    pub fn new(
        account_repo: Arc<R>,
        rate_limiter: Arc<L>,
        codec: SessionTokenCodec,
        config: Arc<AdminConfig>,
    ) -> Self {
        Self {
            account_repo,
            rate_limiter,
            codec,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AdminResult<SignInOutput> {
        let limit = self
            .rate_limiter
            .check_and_increment(
                &format!("admin-login:{}", input.client_key),
                &self.config.login_rate_limit,
            )
            .await?;

        if !limit.allowed {
            return Err(AdminError::TooManyAttempts {
                retry_after_secs: limit.retry_after_secs,
            });
        }

        let username = input.username.trim();
        if username.is_empty() || input.password.is_blank() {
            return Err(AdminError::InvalidRequest(
                "Username and password are required".to_string(),
            ));
        }

        // Unknown user, disabled account and wrong password are indistinguishable
        let mut account = self
            .account_repo
            .find_by_username(username)
            .await?
            .ok_or(AdminError::InvalidCredentials)?;

        if !account.can_sign_in()
            || !verify_hash(
                &input.password,
                &account.password_hash,
                &self.config.server_secret,
            )
        {
            return Err(AdminError::InvalidCredentials);
        }

        account.record_login();
        self.account_repo.upsert(&account).await?;

        let session = AdminSession::new_at(
            &account,
            self.config.session_ttl,
            Utc::now().timestamp_millis(),
        );
        let token = self.codec.encode(&session)?;

        tracing::info!(
            admin_id = %session.admin_id,
            username = %session.username,
            role = %session.role,
            "Admin signed in"
        );

        Ok(SignInOutput { session, token })
    }
}
