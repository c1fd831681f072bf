mod backend;
mod error;
mod session;
mod slash_commands;
mod turn;

pub use backend::*;
pub use error::*;
pub use session::*;
pub use slash_commands::*;
pub use turn::*;
