//! Output formatting

pub mod console;
pub mod html;
pub mod status;
