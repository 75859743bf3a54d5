#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;

pub use analysis::crossings;
pub use analysis::gap;
pub use analysis::scene;
pub use analysis::segment;

pub use geometry::band;
pub use geometry::ellipse;
pub use geometry::polygon;
pub use geometry::r2;

// Re-export key types for external use
pub use band::{Band, BandId};
pub use config::TorusConfig;
pub use crossings::Crossing;
pub use ellipse::Ellipse;
pub use error::TorusError;
pub use polygon::Polygon;
pub use r2::R2;
pub use scene::Scene;
pub use segment::{ArcSegment, Layer};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> log::LevelFilter {
    match level {
        Some("error") => log::LevelFilter::Error,
        Some("warn") => log::LevelFilter::Warn,
        Some("info") | Some("") | None => log::LevelFilter::Info,
        Some("debug") => log::LevelFilter::Debug,
        Some("trace") => log::LevelFilter::Trace,
        Some(level) => panic!("invalid log level: {}", level),
    }
}
