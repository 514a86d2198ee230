// Pipeline processing: validation and normalization of raw rows

pub mod builder;
pub mod normalize;

pub use builder::{build_scheme, SchemeRow};
