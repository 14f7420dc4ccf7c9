//! Command definitions and help text.
//!
//! - `id`: the `CommandId` enum, names, summaries and help groups
//! - `help_texts`: static help entries
//! - `registry`: the validated table the dispatcher looks commands up in

mod help_texts;
mod id;
mod registry;

pub use id::{CommandGroup, CommandId};
pub use registry::{CommandSpec, HelpSpec, Registry, RegistryError};
