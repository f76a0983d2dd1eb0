//! Process exit codes. Part of the CLI contract.

pub const EXIT_SUCCESS: i32 = 0;
/// Unreadable or invalid grid/config input, or bad arguments.
pub const EXIT_CONFIG_ERROR: i32 = 2;
