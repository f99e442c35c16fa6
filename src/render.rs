pub mod block;
pub mod diagnostic;
pub mod factory;
pub mod renderer;
