pub mod feeds;
pub mod notify;
