pub mod bounds;
pub mod coordinates;
pub mod normalize;
pub mod rings;
