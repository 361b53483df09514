pub mod collate;
pub mod parse;
