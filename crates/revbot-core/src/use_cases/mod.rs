pub mod pulls;
pub mod stats;
pub mod teams;
