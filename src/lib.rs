pub mod alignment;
pub mod config;
pub mod error;
pub mod groundtruth;
pub mod io;
pub mod timeline;
pub mod types;
pub mod visualization;
pub mod vo_output;

pub use error::{CompareError, Result};
