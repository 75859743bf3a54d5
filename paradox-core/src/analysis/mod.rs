pub mod crossings;
pub mod gap;
pub mod scene;
pub mod segment;
