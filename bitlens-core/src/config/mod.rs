//! Configuration for bitlens.
//! TOML-based, 3-layer resolution: env > file > defaults.
//!
//! Configuration is presentation-layer only: it shapes how the render
//! layer displays engine results and never changes what the engine
//! computes.

pub mod render_config;

pub use render_config::RenderConfig;
