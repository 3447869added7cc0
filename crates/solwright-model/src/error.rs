use thiserror::Error;

use crate::types::Value;

/// Failures raised while composing or linearizing a contract.
///
/// Every variant is fatal to the current build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("invalid contract identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("ambiguous import for parent '{name}': '{existing}' vs '{requested}'")]
    AmbiguousImport {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("conflicting constructor arguments for parent '{name}': {existing:?} vs {requested:?}")]
    ConflictingConstructorArgs {
        name: String,
        existing: Vec<Value>,
        requested: Vec<Value>,
    },

    #[error("incompatible declaration of function '{signature}': {reason}")]
    IncompatibleFunctionDeclaration { signature: String, reason: String },

    #[error("function '{signature}' overrides unknown parent '{parent}'")]
    UnknownParent { parent: String, signature: String },

    #[error("variable '{name}' already declared as '{existing}', cannot redeclare as '{requested}'")]
    DuplicateVariable {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("constructor argument '{name}' already declared as '{existing}', cannot redeclare as '{requested}'")]
    DuplicateConstructorArgument {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("cyclic inheritance detected: {}", .cycle.join(" -> "))]
    CyclicInheritance { cycle: Vec<String> },
}
