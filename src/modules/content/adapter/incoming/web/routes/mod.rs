mod get_content;
mod reload_content;
mod update_content;

pub use get_content::*;
pub use reload_content::*;
pub use update_content::*;
