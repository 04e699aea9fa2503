//! Identity service: registration, login, OTP issuance and verification,
//! and the password-reset flow.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
