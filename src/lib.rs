#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod logger;
pub mod view;

pub use calendar::*;
