pub mod ease;
pub mod reveal;
pub mod spec;
pub mod visual;
