//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with zeroized clear-text handling
//! - Signed opaque tokens (HMAC-SHA256) and random secrets
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
