//! Entity-Relationship Diagram shape rendering.
//!
//! The core is [`draw`]: four stateless functions that paint attributes
//! (ellipses), entities (rectangles), relationships (diamonds) and weak
//! entities (double rectangles) onto any [`draw::Surface`]. Around it sit
//! scene files, PNG export and a small configuration layer used by the
//! `erdraw` binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod scene;
pub mod util;

pub use config::Config;
pub use scene::Scene;
