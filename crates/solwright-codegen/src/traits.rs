use solwright_model::{Contract, Function, Linearization, Variable};

use crate::context::EmitContext;

/// Target-language emitter for a composed contract.
///
/// The printer decides section order; the emitter renders each piece at the
/// indentation carried by the [`EmitContext`].
pub trait ContractEmitter {
    /// License and compiler directives, emitted once at the top of the file.
    fn emit_header(&self, contract: &Contract) -> String;

    /// Import statements from collected imports.
    fn emit_imports(&self, ctx: &mut EmitContext) -> String;

    /// Documentation tags and the opening of the contract declaration.
    fn emit_contract_open(
        &self,
        contract: &Contract,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> String;

    /// Closing of the contract declaration.
    fn emit_contract_close(&self, ctx: &mut EmitContext) -> String;

    /// A single state variable declaration.
    fn emit_variable(&self, variable: &Variable, ctx: &mut EmitContext) -> String;

    /// The constructor, or `None` when it has nothing to declare.
    fn emit_constructor(
        &self,
        contract: &Contract,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> Option<String>;

    /// A function declaration, or `None` when the inherited one suffices.
    fn emit_function(
        &self,
        function: &Function,
        linearization: &Linearization<'_>,
        ctx: &mut EmitContext,
    ) -> Option<String>;

    /// A single-line comment.
    fn emit_comment(&self, text: &str, ctx: &mut EmitContext) -> String;

    /// File extension for this language (e.g., "sol").
    fn file_extension(&self) -> &str;

    /// Spaces per indentation level.
    fn indent_width(&self) -> usize;
}
