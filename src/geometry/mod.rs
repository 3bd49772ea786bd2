pub mod bilinear;
pub mod resize;
pub mod rotate;
pub mod translate;

mod rows;
