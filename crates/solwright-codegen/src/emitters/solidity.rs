use solwright_model::{Contract, Function, FunctionArgument, Linearization, Mutability, Variable};

use crate::context::EmitContext;
use crate::traits::ContractEmitter;

/// Compiler version constraint written into every generated file.
pub const SOLIDITY_VERSION: &str = "^0.8.17";

/// Headings longer than this are split over several lines.
const MAX_HEADING_LENGTH: usize = 72;

/// Solidity code emitter.
pub struct SolidityEmitter;

impl SolidityEmitter {
    /// Render a function-like declaration (function or constructor).
    ///
    /// Short headings stay on one line; long ones put every modifier on its own
    /// indented line and the opening brace on a line of its own.
    fn emit_callable(
        &self,
        kinded_name: &str,
        args: &[FunctionArgument],
        modifiers: &[String],
        code: &[String],
        ctx: &mut EmitContext,
    ) -> String {
        let params: Vec<String> = args.iter().map(|a| format!("{} {}", a.ty, a.name)).collect();
        let heading_length: usize = std::iter::once(kinded_name.len())
            .chain(params.iter().map(String::len))
            .chain(modifiers.iter().map(String::len))
            .sum();
        let braces = if code.is_empty() { "{}" } else { "{" };
        let signature = format!("{}({})", kinded_name, params.join(", "));

        let mut lines = Vec::new();
        if heading_length <= MAX_HEADING_LENGTH {
            let mut parts = vec![signature];
            parts.extend(modifiers.iter().cloned());
            parts.push(braces.to_string());
            lines.push(ctx.line(&parts.join(" ")));
        } else {
            lines.push(ctx.line(&signature));
            ctx.push_indent();
            for modifier in modifiers {
                lines.push(ctx.line(modifier));
            }
            ctx.pop_indent();
            lines.push(ctx.line(braces));
        }

        if !code.is_empty() {
            ctx.push_indent();
            for fragment in code {
                for line in fragment.lines() {
                    if line.trim().is_empty() {
                        lines.push(String::new());
                    } else {
                        lines.push(ctx.line(line));
                    }
                }
            }
            ctx.pop_indent();
            lines.push(ctx.line("}"));
        }

        lines.join("\n")
    }
}

/// Override specifier for a set of overridden parents, ordered by linearization.
pub fn override_specifier(function: &Function, linearization: &Linearization<'_>) -> Option<String> {
    match function.overrides().len() {
        0 => None,
        1 => Some("override".to_string()),
        _ => Some(format!(
            "override({})",
            linearization.sort(function.overrides()).join(", ")
        )),
    }
}

impl ContractEmitter for SolidityEmitter {
    fn emit_header(&self, contract: &Contract) -> String {
        format!(
            "// SPDX-License-Identifier: {}\npragma solidity {};",
            contract.license(),
            SOLIDITY_VERSION
        )
    }

    fn emit_imports(&self, ctx: &mut EmitContext) -> String {
        ctx.imports()
            .iter()
            .map(|import| format!("import \"{}\";", import.path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emit_contract_open(
        &self,
        contract: &Contract,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> String {
        let mut lines: Vec<String> = contract
            .natspec_tags()
            .iter()
            .map(|tag| ctx.line(&format!("/// {} {}", tag.key, tag.value)))
            .collect();

        let parents = linearization.names();
        if parents.is_empty() {
            lines.push(ctx.line(&format!("contract {} {{", contract.name())));
        } else {
            lines.push(ctx.line(&format!(
                "contract {} is {} {{",
                contract.name(),
                parents.join(", ")
            )));
        }
        lines.join("\n")
    }

    fn emit_contract_close(&self, ctx: &mut EmitContext) -> String {
        ctx.line("}")
    }

    fn emit_variable(&self, variable: &Variable, ctx: &mut EmitContext) -> String {
        ctx.line(&format!("{};", variable))
    }

    fn emit_constructor(
        &self,
        contract: &Contract,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> Option<String> {
        let parent_calls: Vec<String> = linearization
            .parents()
            .iter()
            .filter_map(|parent| {
                let args = parent.args()?;
                let values: Vec<String> = args.iter().map(|v| v.to_string()).collect();
                Some(format!("{}({})", parent.name(), values.join(", ")))
            })
            .collect();

        if parent_calls.is_empty()
            && contract.constructor_args().is_empty()
            && contract.constructor_code().is_empty()
        {
            return None;
        }

        Some(self.emit_callable(
            "constructor",
            contract.constructor_args(),
            &parent_calls,
            contract.constructor_code(),
            ctx,
        ))
    }

    fn emit_function(
        &self,
        function: &Function,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> Option<String> {
        let overrides = function.overrides();
        if overrides.len() <= 1 && function.code().is_empty() && !function.has_modifiers() {
            return None;
        }

        let decl = function.declaration();
        let mut modifiers = vec![decl.kind().to_string()];
        if decl.mutability() != Mutability::Nonpayable {
            modifiers.push(decl.mutability().to_string());
        }
        if let Some(specifier) = override_specifier(function, linearization) {
            modifiers.push(specifier);
        }
        modifiers.extend(function.modifiers().map(str::to_string));
        if !decl.returns().is_empty() {
            modifiers.push(format!("returns ({})", decl.returns().join(", ")));
        }

        let mut code = function.code().to_vec();
        if !overrides.is_empty() {
            let arg_names: Vec<&str> = decl.args().iter().map(|a| a.name.as_str()).collect();
            let super_call = format!("super.{}({});", decl.name(), arg_names.join(", "));
            if decl.returns().is_empty() {
                code.push(super_call);
            } else {
                code.push(format!("return {super_call}"));
            }
        }

        Some(self.emit_callable(
            &format!("function {}", decl.name()),
            decl.args(),
            &modifiers,
            &code,
            ctx,
        ))
    }

    fn emit_comment(&self, text: &str, ctx: &mut EmitContext) -> String {
        ctx.line(&format!("// {}", text))
    }

    fn file_extension(&self) -> &str {
        "sol"
    }

    fn indent_width(&self) -> usize {
        4
    }
}
