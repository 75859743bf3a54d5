pub mod band;
pub mod ellipse;
pub mod polygon;
pub mod r2;
