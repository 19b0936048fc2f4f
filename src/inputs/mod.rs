pub mod handler;
pub mod key;
