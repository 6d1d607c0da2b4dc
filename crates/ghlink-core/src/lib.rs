pub mod config;
pub mod logging;

pub mod compose;
pub mod git;
pub mod resolve;
