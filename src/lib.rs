pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod locale;
pub mod params;
pub mod server;
pub mod state;
pub mod words;
