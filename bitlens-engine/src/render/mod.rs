//! Render formats for engine results.
//!
//! 2 renderer formats: console text and JSON. The UI layer is a caller of
//! the engine; these give it ready-to-display output without pulling
//! presentation concerns into the engine components themselves.

pub mod console;
pub mod json;

pub use console::ConsoleRenderer;
pub use json::JsonRenderer;

use bitlens_core::RenderConfig;

use crate::float::FloatDecomposition;
use crate::radix::RadixView;
use crate::simulate::OperationTrace;

/// Trait for result rendering.
pub trait Renderer: Send + Sync {
    fn name(&self) -> &'static str;
    fn radix(&self, view: &RadixView) -> Result<String, String>;
    fn float(&self, decomposition: &FloatDecomposition) -> Result<String, String>;
    fn trace(&self, trace: &OperationTrace) -> Result<String, String>;
}

/// Create a renderer by format name.
pub fn create_renderer(format: &str, config: &RenderConfig) -> Option<Box<dyn Renderer>> {
    match format {
        "console" => Some(Box::new(console::ConsoleRenderer::new(config.clone()))),
        "json" => Some(Box::new(json::JsonRenderer)),
        _ => None,
    }
}

/// List all available renderer format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

/// Split a bit string into space-separated groups of `group_size` bits.
/// A sign prefix passes through ungrouped; placeholder characters group
/// like any other position.
pub fn group_bits(bits: &str, group_size: usize) -> String {
    if group_size == 0 {
        return bits.to_string();
    }

    let (sign, body) = match bits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", bits),
    };

    let groups: Vec<&str> = body
        .as_bytes()
        .chunks(group_size)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();

    format!("{}{}", sign, groups.join(" "))
}
