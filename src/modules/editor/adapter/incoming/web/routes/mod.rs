mod apply_commands;
mod save;
mod session;

pub use apply_commands::*;
pub use save::*;
pub use session::*;
