//! Ready to use pieces: file parsers and transfer functions.

pub mod parse;
pub mod transfer_functions;

pub use parse::{from_file, ChannelStack};
