//! Console renderer — human-readable text output.

use bitlens_core::RenderConfig;

use crate::float::FloatDecomposition;
use crate::radix::RadixView;
use crate::simulate::OperationTrace;

use super::{group_bits, Renderer};

/// Console renderer for human-readable terminal output.
///
/// Bit strings are grouped per the render configuration, mirroring the
/// 4-bit display blocks of the visualization layer.
pub struct ConsoleRenderer {
    pub config: RenderConfig,
}

impl ConsoleRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn bits(&self, s: &str) -> String {
        group_bits(s, self.config.effective_group_size())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer for ConsoleRenderer {
    fn name(&self) -> &'static str {
        "console"
    }

    fn radix(&self, view: &RadixView) -> Result<String, String> {
        let hex = if self.config.effective_uppercase_hex() {
            view.hex.clone()
        } else {
            view.hex.to_lowercase()
        };
        // The sign belongs ahead of the prefix: -0xFF, not 0x-FF.
        let (hex_sign, hex_digits) = match hex.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", hex.as_str()),
        };

        let mut output = String::new();
        output.push_str(&format!("decimal:          {}\n", view.decimal));
        output.push_str(&format!("binary (32-bit):  {}\n", self.bits(&view.binary)));
        output.push_str(&format!("octal:            {}\n", view.octal));
        output.push_str(&format!(
            "hex:              {}{}{}\n",
            hex_sign,
            self.config.effective_hex_prefix(),
            hex_digits
        ));
        output.push_str(&format!(
            "two's complement: {}\n",
            self.bits(&view.twos_complement)
        ));
        Ok(output)
    }

    fn float(&self, decomposition: &FloatDecomposition) -> Result<String, String> {
        let mut output = String::new();
        output.push_str(&format!("value:    {}\n", decomposition.value));
        output.push_str(&format!("class:    {}\n", decomposition.class().name()));
        output.push_str(&format!(
            "sign:     {} ({})\n",
            decomposition.sign_bit,
            if decomposition.sign == 0 { "+" } else { "-" }
        ));
        output.push_str(&format!(
            "exponent: {} (biased {}, unbiased {})\n",
            decomposition.exponent_bits,
            decomposition.biased_exponent,
            decomposition.unbiased_exponent
        ));
        output.push_str(&format!("fraction: {}\n", decomposition.fraction_bits));
        output.push_str(&format!(
            "encoding: {} {} {}\n",
            decomposition.sign_bit, decomposition.exponent_bits, decomposition.fraction_bits
        ));
        // The normalized formula only holds when an implicit leading 1
        // exists.
        if decomposition.class().has_implicit_one() {
            output.push_str(&format!(
                "formula:  {} = (-1)^{} * 2^{} * (1 + fraction)\n",
                decomposition.value, decomposition.sign, decomposition.unbiased_exponent
            ));
        }
        Ok(output)
    }

    fn trace(&self, trace: &OperationTrace) -> Result<String, String> {
        let mut output = String::new();

        for step in &trace.steps {
            output.push_str(&format!("step {}:\n", step.index));
            for (i, operand) in step.operands.iter().enumerate() {
                if i > 0 {
                    output.push_str(&format!("  {}\n", step.operator));
                }
                output.push_str(&format!("  {}\n", self.bits(operand)));
            }
            if step.operands.len() == 1 {
                output.push_str(&format!("  {}\n", step.operator));
            }
            if let Some(carry) = step.carry {
                output.push_str(&format!("  carry: {}", carry));
                if let Some(position) = step.position {
                    output.push_str(&format!(" at bit {}", position));
                }
                output.push('\n');
            }
            let result = self.bits(&step.result);
            output.push_str(&format!("  {}\n", "=".repeat(result.len())));
            output.push_str(&format!("  {}\n\n", result));
        }

        output.push_str(&format!(
            "result: {} ({})\n",
            trace.result,
            self.bits(&trace.result_bits)
        ));
        Ok(output)
    }
}
