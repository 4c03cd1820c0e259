//! Single reaction blocks (`$RXN`): header, role counts and the molecule
//! templates that follow.

pub mod reader;
pub mod writer;
