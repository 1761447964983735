pub mod array;
pub mod boolean;
pub mod date;
pub mod misc;
pub mod number;
pub mod object;
pub mod string;

pub use crate::utils::error::Result;
