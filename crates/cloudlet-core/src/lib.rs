pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod url_builder;
