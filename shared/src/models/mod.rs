//! Domain models shared between flock-cloud and its clients

pub mod account_request;
pub mod checkin;
pub mod church;
pub mod convert;
pub mod member;

pub use account_request::*;
pub use checkin::*;
pub use church::*;
pub use convert::*;
pub use member::*;
