mod error;
pub use error::*;
mod error_kind;
pub use error_kind::*;
mod utils;
pub use utils::{format_quoted_strings, PathExt};
pub type Result<T> = std::result::Result<T, Error>;
pub use anyhow;
pub use anyhow::format_err;
