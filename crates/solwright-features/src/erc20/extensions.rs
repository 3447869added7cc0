//! Features that only add a parent contract.

use solwright_model::{CompositionError, ContractComposer, Value};

use crate::catalog::{Catalog, Module};

pub fn add_burnable(c: &mut dyn ContractComposer, catalog: &Catalog) -> Result<(), CompositionError> {
    c.add_parent(catalog.feature(Module::Burnable), None)
}

pub fn add_batch_transferable(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
) -> Result<(), CompositionError> {
    c.add_parent(catalog.feature(Module::BatchTransferable), None)
}

/// Gasless approvals; the permit domain is named after the token.
pub fn add_permit(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    name: &str,
) -> Result<(), CompositionError> {
    c.add_parent(catalog.feature(Module::Permit), Some(vec![Value::string(name)]))
}
