//! Database access layer

pub mod account_requests;
pub mod checkins;
pub mod churches;
pub mod converts;
pub mod form_configs;
pub mod members;
