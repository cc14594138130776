pub mod api;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod process;
