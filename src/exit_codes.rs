//! Process exit codes for the `ata-risk` binary.

pub const OK: i32 = 0;
/// Invalid case input, unreadable file, or invalid dosage table.
pub const INPUT_ERROR: i32 = 2;
