use once_cell::sync::Lazy;
use solwright_model::{
    define_functions, CompositionError, ContractComposer, FunctionDef, FunctionSet, Value,
};

use crate::amount::Amount;
use crate::catalog::{Catalog, Module};

static FUNCTIONS: Lazy<FunctionSet> = Lazy::new(|| {
    define_functions([(
        "_mint",
        FunctionDef::internal()
            .arg("account", "address")
            .arg("amount", "uint256"),
    )])
});

/// Limit total supply to `cap` whole tokens.
pub fn add_capped(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    cap: &Amount,
) -> Result<(), CompositionError> {
    let capped = catalog.feature(Module::Capped);
    let capped_name = capped.name.clone();
    c.add_parent(capped, Some(vec![Value::expr(cap.to_expression())]))?;
    c.add_override(catalog.standard(), &FUNCTIONS["_mint"])?;
    c.add_override(&capped_name, &FUNCTIONS["_mint"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use solwright_model::ContractBuilder;

    #[test]
    fn test_capped_overrides_mint() {
        let catalog = Catalog::default();
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(catalog.token(), None).unwrap();
        add_capped(&mut c, &catalog, &Amount::parse("cap", "1000000").unwrap()).unwrap();
        let contract = c.build();

        let capped = contract.parent("ERC20Capped").unwrap();
        assert_eq!(capped.args(), Some(&[Value::expr("1000000 * 10 ** 18")][..]));
        let mint = contract.function("_mint(address,uint256)").unwrap();
        let overrides: Vec<&str> = mint.overrides().iter().map(String::as_str).collect();
        assert_eq!(overrides, ["ERC20", "ERC20Capped"]);
    }
}
