pub mod solidity;

use crate::traits::ContractEmitter;

pub use solidity::SolidityEmitter;

/// Create the emitter used when none is specified.
pub fn default_emitter() -> Box<dyn ContractEmitter> {
    Box::new(SolidityEmitter)
}
