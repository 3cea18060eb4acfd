pub mod document;
pub mod prep;
