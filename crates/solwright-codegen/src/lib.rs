pub mod context;
pub mod error;
pub mod generator;
pub mod traits;

// Target language emitters
pub mod emitters;

// Re-exports
pub use context::EmitContext;
pub use error::CodegenError;
pub use generator::{print_contract, ContractPrinter, GeneratedContract};
pub use traits::ContractEmitter;
