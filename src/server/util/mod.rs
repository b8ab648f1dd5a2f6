pub mod cookie;
pub mod hash;
pub mod parse;
pub mod validate;
