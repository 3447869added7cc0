pub mod builder;
pub mod error;
pub mod function;
pub mod identifier;
pub mod linearize;
pub mod types;

// Re-exports
pub use builder::{ContractBuilder, ContractComposer};
pub use error::CompositionError;
pub use function::{
    define_functions, Function, FunctionArgument, FunctionDef, FunctionKind, FunctionRef,
    FunctionSet, Mutability,
};
pub use linearize::{linearize, InheritanceGraph, Linearization};
pub use types::{Contract, NatspecTag, Parent, ParentEntry, Storage, Value, Variable, Visibility};
