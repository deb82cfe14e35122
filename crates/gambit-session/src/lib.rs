//! Game sessions and the text protocol for gambit.

pub mod command;
pub mod error;
pub mod server;
pub mod store;

pub use command::{Command, SessionOption, parse_command};
pub use error::ProtocolError;
pub use server::GameServer;
pub use store::{GameHandle, SessionConfig, SessionStore};
