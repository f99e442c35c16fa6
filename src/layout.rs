pub mod measure;
pub mod taffy_bridge;
