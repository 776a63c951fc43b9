pub mod bbox;
pub mod center;
pub mod ops;
pub mod pipeline;
