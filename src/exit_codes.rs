//! Process exit codes reported by the `devlink` binary.
//!
//! - `0`: success
//! - `1`: general failure, including a declined confirmation prompt
//! - `2`: invalid command-line usage (reported by clap)
//! - `3`: a clone did not produce a usable checkout directory

/// The command completed successfully.
pub const SUCCESS: i32 = 0;

/// The command failed.
pub const ERROR: i32 = 1;

/// Invalid command-line usage.
pub const USAGE: i32 = 2;

/// A repository clone did not materialize the expected directory.
pub const FETCH_FAILED: i32 = 3;
