/// Address normalization command.
pub mod address;
/// Plain JSON decode command.
pub mod decode;
/// Event payload command.
pub mod event;
/// Document summary command.
pub mod info;
/// Tree rendering for decoded values.
pub mod print;
/// Truncated tree display command.
pub mod show;
/// Shared argument and output helpers.
pub mod util;
