pub mod closest_point;
pub mod point_location;

#[doc(inline)]
pub use closest_point::{closest_point_on_polygon, closest_point_on_segment};

#[doc(inline)]
pub use point_location::{in_polygon, locate, on_segment};
