//! RealPro App — wires the store backends and services together and
//! exposes the navigation surface consumed by the rendering layer.

pub mod app;
pub mod routes;

pub use app::{App, AppConfig, Dashboard};
pub use routes::{NavOutcome, Route, resolve_route};
