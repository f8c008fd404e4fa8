//! JSON renderer — the structured wire format consumed by the UI layer.

use serde::Serialize;

use crate::float::FloatDecomposition;
use crate::radix::RadixView;
use crate::simulate::OperationTrace;

use super::Renderer;

/// Renders result records as pretty-printed JSON.
pub struct JsonRenderer;

impl JsonRenderer {
    fn serialize<T: Serialize>(value: &T) -> Result<String, String> {
        serde_json::to_string_pretty(value).map_err(|e| e.to_string())
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn radix(&self, view: &RadixView) -> Result<String, String> {
        Self::serialize(view)
    }

    fn float(&self, decomposition: &FloatDecomposition) -> Result<String, String> {
        Self::serialize(decomposition)
    }

    fn trace(&self, trace: &OperationTrace) -> Result<String, String> {
        Self::serialize(trace)
    }
}
