//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, random tokens)
//! - Cookie management
//! - Client IP extraction
//! - In-memory rate limiting
//! - Form text sanitization and format checks

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod rate_limit;
pub mod text;
