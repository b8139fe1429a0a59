//! Value Object Module

pub mod admin_password;
pub mod admin_role;
pub mod permission;
pub mod salted_hash;
