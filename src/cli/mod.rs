//! Interactive text driver: menu commands, rendering and the session loop

pub mod command;
pub mod render;
pub mod session;

pub use command::MenuCommand;
pub use session::{Flow, Session};
