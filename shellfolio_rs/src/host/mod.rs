//! Hosts drive an interpreter: one reads keys from a raw terminal, the other
//! feeds it lines of text.

pub mod keys;
pub mod script;
pub mod terminal;

pub use keys::{HostAction, map_key};
pub use script::run_script;
pub use terminal::run_terminal;
