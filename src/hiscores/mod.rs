//! Hiscores endpoint access and response decoding.

pub mod http;
pub mod parse;
pub mod skills;
pub mod types;
