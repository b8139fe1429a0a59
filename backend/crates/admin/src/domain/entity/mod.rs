//! Entity Module

pub mod admin_account;
pub mod admin_session;
