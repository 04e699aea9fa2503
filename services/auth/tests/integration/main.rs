mod helpers;

mod account_test;
mod otp_test;
