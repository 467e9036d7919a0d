pub mod classify;
pub mod conf;
pub mod watch;
