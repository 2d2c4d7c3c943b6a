//! Application-facing traits

pub mod handler;

pub use handler::EventHandler;
