//! Helpers shared by the content model and the data files.

pub mod date;
pub mod image;
pub mod youtube;
