pub mod index;
pub mod parse;
pub mod rewrite;
