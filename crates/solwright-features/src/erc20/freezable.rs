use once_cell::sync::Lazy;
use solwright_model::{define_functions, CompositionError, ContractComposer, FunctionDef, FunctionSet};

use crate::access::{require_access_control, Access};
use crate::catalog::{Catalog, Module};

static FUNCTIONS: Lazy<FunctionSet> = Lazy::new(|| {
    define_functions([
        (
            "_beforeTokenTransfer",
            FunctionDef::internal()
                .arg("from", "address")
                .arg("to", "address")
                .arg("amount", "uint256"),
        ),
        ("freeze", FunctionDef::public().arg("account", "address")),
        ("unfreeze", FunctionDef::public().arg("account", "address")),
    ])
});

/// Let a privileged account block transfers from and to specific accounts.
pub fn add_freezable(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    access: Access,
) -> Result<(), CompositionError> {
    let freezable = catalog.feature(Module::Freezable);
    let name = freezable.name.clone();
    c.add_parent(freezable, None)?;
    c.add_override(&name, &FUNCTIONS["_beforeTokenTransfer"])?;

    require_access_control(c, catalog, &FUNCTIONS["freeze"], access, "FREEZER")?;
    c.add_function_code("_freeze(account);", &FUNCTIONS["freeze"])?;

    require_access_control(c, catalog, &FUNCTIONS["unfreeze"], access, "FREEZER")?;
    c.add_function_code("_unfreeze(account);", &FUNCTIONS["unfreeze"])
}
