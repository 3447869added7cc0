use once_cell::sync::Lazy;
use solwright_model::{define_functions, CompositionError, ContractComposer, FunctionDef, FunctionSet};

use crate::access::{require_access_control, Access};
use crate::catalog::Catalog;

static FUNCTIONS: Lazy<FunctionSet> = Lazy::new(|| {
    define_functions([(
        "mint",
        FunctionDef::public()
            .arg("to", "address")
            .arg("amount", "uint256"),
    )])
});

pub fn add_mintable(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    access: Access,
) -> Result<(), CompositionError> {
    require_access_control(c, catalog, &FUNCTIONS["mint"], access, "MINTER")?;
    c.add_function_code("_mint(to, amount);", &FUNCTIONS["mint"])
}
