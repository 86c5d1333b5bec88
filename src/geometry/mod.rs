mod circle;

pub use circle::{circle3pts, Circle2};
