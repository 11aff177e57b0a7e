pub mod controls;
pub mod pointer;

pub use controls::{read_initial_config, show_readout, wire_controls};
pub use pointer::{wire_pointer_handlers, PointerWiring};
