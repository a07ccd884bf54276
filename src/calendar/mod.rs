mod agenda;
mod event;
mod event_id;
mod grid;
mod resolver;
mod store;
mod week;

pub mod date;

pub use agenda::*;
pub use event::*;
pub use event_id::*;
pub use grid::*;
pub use resolver::*;
pub use store::*;
pub use week::*;
