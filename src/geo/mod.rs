//! Geo module - Static region coordinates and map join

mod resolver;

pub use resolver::{GeoPoint, GeoResolver, MapEntry};
