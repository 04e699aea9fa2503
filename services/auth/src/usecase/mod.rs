pub mod account;
pub mod otp;
pub mod password_reset;
