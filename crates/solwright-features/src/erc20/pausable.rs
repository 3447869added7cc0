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
        ("pause", FunctionDef::public()),
        ("unpause", FunctionDef::public()),
    ])
});

pub fn add_pausable(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    access: Access,
) -> Result<(), CompositionError> {
    let pausable = catalog.feature(Module::Pausable);
    let name = pausable.name.clone();
    c.add_parent(pausable, None)?;
    c.add_override(&name, &FUNCTIONS["_beforeTokenTransfer"])?;

    require_access_control(c, catalog, &FUNCTIONS["pause"], access, "PAUSER")?;
    c.add_function_code("_pause();", &FUNCTIONS["pause"])?;

    require_access_control(c, catalog, &FUNCTIONS["unpause"], access, "PAUSER")?;
    c.add_function_code("_unpause();", &FUNCTIONS["unpause"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use solwright_model::ContractBuilder;

    #[test]
    fn test_pausable_guards_both_functions() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        add_pausable(&mut c, &Catalog::default(), Access::Roles).unwrap();
        let contract = c.build();

        for signature in ["pause()", "unpause()"] {
            let f = contract.function(signature).unwrap();
            let modifiers: Vec<&str> = f.modifiers().collect();
            assert_eq!(modifiers, ["onlyRole(PAUSER_ROLE)"]);
        }
        assert_eq!(contract.function("pause()").unwrap().code(), ["_pause();"]);
        assert!(contract.variable("PAUSER_ROLE").is_some());
    }
}
