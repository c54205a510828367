pub mod media_record;
pub mod stat_record;
pub mod user_account;
