pub mod password_reset_tokens;
pub mod user_details;
pub mod users;
