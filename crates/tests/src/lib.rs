#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod placeholder_tests;

#[cfg(test)]
mod process_config_tests;
