pub mod geometry;
pub mod observer;
