pub mod host;
pub mod subnet;
