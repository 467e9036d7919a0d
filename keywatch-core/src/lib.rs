pub mod classify;
pub mod cli;
pub mod conf;
pub mod display;
pub mod ingest;
pub mod logging;
pub mod state;
