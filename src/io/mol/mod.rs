//! V2000 molecule blocks (`$MOL`).

pub mod reader;
pub mod record;
pub mod writer;
