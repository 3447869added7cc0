use once_cell::sync::Lazy;
use solwright_model::{
    define_functions, CompositionError, ContractComposer, FunctionDef, FunctionSet, Value,
};

use crate::amount::Amount;
use crate::catalog::Catalog;

static FUNCTIONS: Lazy<FunctionSet> = Lazy::new(|| {
    define_functions([(
        "_beforeTokenTransfer",
        FunctionDef::internal()
            .arg("from", "address")
            .arg("to", "address")
            .arg("amount", "uint256"),
    )])
});

/// Token base contract with its name and symbol.
pub fn add_base(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    name: &str,
    symbol: &str,
) -> Result<(), CompositionError> {
    let token = catalog.token();
    let standard = token.name.clone();
    c.add_parent(token, Some(vec![Value::string(name), Value::string(symbol)]))?;
    c.add_override(&standard, &FUNCTIONS["_beforeTokenTransfer"])
}

/// Mint `amount` whole tokens to `recipient` at deployment.
pub fn add_premint(c: &mut dyn ContractComposer, amount: &Amount, recipient: &str) {
    c.add_constructor_code(&format!(
        "_mint({}, {});",
        recipient,
        amount.to_expression()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use solwright_model::ContractBuilder;

    #[test]
    fn test_base_declares_token_and_hook() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        add_base(&mut c, &Catalog::default(), "My Token", "MTK").unwrap();
        let contract = c.build();

        let token = contract.parent("ERC20").unwrap();
        assert_eq!(
            token.args(),
            Some(&[Value::string("My Token"), Value::string("MTK")][..])
        );
        let hook = contract
            .function("_beforeTokenTransfer(address,address,uint256)")
            .unwrap();
        assert!(hook.overrides().contains("ERC20"));
        assert!(hook.code().is_empty());
    }

    #[test]
    fn test_premint_scales_decimals() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        add_premint(&mut c, &Amount::parse("premint", "1.5").unwrap(), "msg.sender");
        assert_eq!(
            c.build().constructor_code(),
            ["_mint(msg.sender, 15 * 10 ** 17);"]
        );
    }
}
