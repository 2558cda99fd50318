//! HandIntent- und HandCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::HandCommand;
pub use intent::HandIntent;
