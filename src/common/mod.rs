pub mod command;
pub mod paths;
pub mod session;
pub mod shell;
pub mod strings;

pub use command::{CommandRunner, Invocation, SystemRunner};
