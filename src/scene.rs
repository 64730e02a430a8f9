pub mod document;
pub mod formation;
pub mod play;
