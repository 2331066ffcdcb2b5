pub mod log_file;

pub use log_file::{ResultLog, HEADER_PREFIX};
