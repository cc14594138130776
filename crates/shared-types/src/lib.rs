pub mod config;
pub mod error;
pub mod page;
pub mod process;

pub use config::*;
pub use error::*;
pub use page::*;
pub use process::*;
