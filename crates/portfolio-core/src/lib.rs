pub mod color;
pub mod constants;
pub mod contact;
pub mod content;
pub mod field;

pub use color::*;
pub use constants::*;
pub use contact::*;
pub use field::*;
