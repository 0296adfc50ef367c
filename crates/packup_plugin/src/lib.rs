mod hook;
pub use hook::*;
mod plugin;
pub use plugin::*;
