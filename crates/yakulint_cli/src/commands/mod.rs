pub mod extensions;
pub mod parse;
