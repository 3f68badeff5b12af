pub mod duration;
pub mod json;
