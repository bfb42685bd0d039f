pub mod cards;
pub mod common;
