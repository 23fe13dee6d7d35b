pub mod config;
pub mod logging;

pub mod checksum;
pub mod compare;
pub mod error;
pub mod verify;
