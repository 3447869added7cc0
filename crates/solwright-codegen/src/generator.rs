use std::path::{Path, PathBuf};

use solwright_model::{linearize, Contract, Function};
use tracing::debug;

use crate::context::EmitContext;
use crate::emitters;
use crate::error::CodegenError;
use crate::traits::ContractEmitter;

/// Comment introducing functions that exist only to resolve multiple inheritance.
const OVERRIDES_COMMENT: &str = "The following functions are overrides required by Solidity.";

/// A printed contract and the file name it should be written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContract {
    file_name: String,
    source: String,
}

impl GeneratedContract {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Write the source into `output_dir`, returning the full path written.
    pub fn write_to_disk(&self, output_dir: &Path) -> Result<PathBuf, std::io::Error> {
        std::fs::create_dir_all(output_dir)?;
        let full_path = output_dir.join(&self.file_name);
        std::fs::write(&full_path, &self.source)?;
        Ok(full_path)
    }
}

/// Serializes a finished contract model into source text.
pub struct ContractPrinter {
    emitter: Box<dyn ContractEmitter>,
}

impl std::fmt::Debug for ContractPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractPrinter")
            .field("extension", &self.emitter.file_extension())
            .finish()
    }
}

impl Default for ContractPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractPrinter {
    /// Create a printer for the default target (Solidity).
    pub fn new() -> Self {
        Self::with_emitter(emitters::default_emitter())
    }

    pub fn with_emitter(emitter: Box<dyn ContractEmitter>) -> Self {
        Self { emitter }
    }

    /// Print `contract` to source text.
    ///
    /// Fails only when the parents cannot be linearized; no text is produced then.
    pub fn print(&self, contract: &Contract) -> Result<String, CodegenError> {
        let linearization = linearize(contract)?;
        debug!(contract = contract.name(), parents = ?linearization.names(), "linearized");

        let mut ctx = EmitContext::new(self.emitter.indent_width());
        for parent in linearization.parents() {
            ctx.add_import(parent.path());
        }

        let mut out = self.emitter.emit_header(contract);
        out.push_str("\n\n");

        let imports = self.emitter.emit_imports(&mut ctx);
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push_str("\n\n");
        }

        out.push_str(&self.emitter.emit_contract_open(contract, &linearization, &mut ctx));
        out.push('\n');

        // 1. Body sections, one blank line apart
        ctx.push_indent();
        let mut sections = Vec::new();

        let variables: Vec<String> = contract
            .variables()
            .map(|v| self.emitter.emit_variable(v, &mut ctx))
            .collect();
        if !variables.is_empty() {
            sections.push(variables.join("\n"));
        }

        if let Some(constructor) = self.emitter.emit_constructor(contract, &linearization, &mut ctx) {
            sections.push(constructor);
        }

        // 2. Functions with their own code first, then pure override resolutions
        let (with_code, override_only): (Vec<&Function>, Vec<&Function>) = contract
            .functions()
            .partition(|f| !f.code().is_empty() || f.has_modifiers());

        for function in with_code {
            if let Some(code) = self.emitter.emit_function(function, &linearization, &mut ctx) {
                sections.push(code);
            }
        }

        let overrides: Vec<String> = override_only
            .into_iter()
            .filter_map(|f| self.emitter.emit_function(f, &linearization, &mut ctx))
            .collect();
        if !overrides.is_empty() {
            sections.push(self.emitter.emit_comment(OVERRIDES_COMMENT, &mut ctx));
            sections.extend(overrides);
        }
        ctx.pop_indent();

        if !sections.is_empty() {
            out.push_str(&sections.join("\n\n"));
            out.push('\n');
        }
        out.push_str(&self.emitter.emit_contract_close(&mut ctx));
        out.push('\n');

        Ok(out)
    }

    /// Print `contract` and name the output file after it.
    pub fn generate(&self, contract: &Contract) -> Result<GeneratedContract, CodegenError> {
        let source = self.print(contract)?;
        Ok(GeneratedContract {
            file_name: format!("{}.{}", contract.name(), self.emitter.file_extension()),
            source,
        })
    }
}

/// Print a contract with the default printer.
pub fn print_contract(contract: &Contract) -> Result<String, CodegenError> {
    ContractPrinter::new().print(contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use solwright_model::{ContractBuilder, ContractComposer, Parent};

    #[test]
    fn test_empty_contract() {
        let contract = ContractBuilder::new("Empty").unwrap().build();
        let out = print_contract(&contract).unwrap();
        assert_eq!(
            out,
            "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.17;\n\ncontract Empty {\n}\n"
        );
    }

    #[test]
    fn test_generated_contract_write_to_disk() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(Parent::new("ERC20", "contracts/ERC20.sol"), None)
            .unwrap();
        let generated = ContractPrinter::new().generate(&c.build()).unwrap();
        assert_eq!(generated.file_name(), "MyToken.sol");

        let dir = tempfile::tempdir().unwrap();
        let path = generated.write_to_disk(&dir.path().join("out")).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, generated.source());
        assert!(content.contains("import \"contracts/ERC20.sol\";"));
    }

    #[test]
    fn test_cycle_prints_nothing() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(Parent::new("A", "a.sol").extends("B"), None).unwrap();
        c.add_parent(Parent::new("B", "b.sol").extends("A"), None).unwrap();
        let result = print_contract(&c.build());
        assert!(matches!(result, Err(CodegenError::Composition(_))));
    }
}
