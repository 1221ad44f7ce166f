//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const INVALID_VIDEO_REFERENCE: i32 = 1; // URL did not resolve to a video id
pub const INTERNAL_ERROR: i32 = 2; // Setup or config failure
