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
        (
            "lock",
            FunctionDef::public()
                .arg("account", "address")
                .arg("amount", "uint256")
                .arg("releaseTime", "uint256"),
        ),
        ("unlock", FunctionDef::public().arg("account", "address")),
    ])
});

/// Time-locked balances that cannot be transferred before their release time.
pub fn add_lockable(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    access: Access,
) -> Result<(), CompositionError> {
    let lockable = catalog.feature(Module::Lockable);
    let name = lockable.name.clone();
    c.add_parent(lockable, None)?;
    c.add_override(&name, &FUNCTIONS["_beforeTokenTransfer"])?;

    require_access_control(c, catalog, &FUNCTIONS["lock"], access, "LOCKER")?;
    c.add_function_code("_lock(account, amount, releaseTime);", &FUNCTIONS["lock"])?;

    require_access_control(c, catalog, &FUNCTIONS["unlock"], access, "LOCKER")?;
    c.add_function_code("_unlock(account);", &FUNCTIONS["unlock"])
}
