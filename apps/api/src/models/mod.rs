pub mod document;
pub mod keyword;
pub mod match_result;
