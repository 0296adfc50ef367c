pub const UNRESOLVED_ENTRY: &str = "UNRESOLVED_ENTRY";
pub const UNRESOLVED_IMPORT: &str = "UNRESOLVED_IMPORT";
pub const DUPLICATE_ENTRY_NAME: &str = "DUPLICATE_ENTRY_NAME";
pub const NON_STATIC_REQUIRE: &str = "NON_STATIC_REQUIRE";
pub const PARSE_FAILED: &str = "PARSE_FAILED";
pub const TRANSFORM_FAILED: &str = "TRANSFORM_FAILED";
pub const IO_ERROR: &str = "IO_ERROR";
pub const PANIC: &str = "PANIC";
