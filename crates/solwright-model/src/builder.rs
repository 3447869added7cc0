use tracing::debug;

use crate::error::CompositionError;
use crate::function::{Function, FunctionArgument, FunctionRef};
use crate::identifier::is_valid_identifier;
use crate::types::{Contract, NatspecTag, Parent, ParentEntry, Value, Variable};

/// Mutation API through which feature registrars declare capabilities.
///
/// Every operation validates eagerly and fails at the call site; a failed call
/// leaves the model unchanged.
pub trait ContractComposer {
    /// Add a parent contract, optionally forwarding constructor arguments to it.
    ///
    /// Idempotent by name. Fails if the name is already bound to a different
    /// import path, or if both calls supply differing arguments.
    fn add_parent(&mut self, parent: Parent, args: Option<Vec<Value>>) -> Result<(), CompositionError>;

    /// Append a code fragment to a function body, creating the function on first use.
    fn add_function_code(&mut self, code: &str, function: &FunctionRef) -> Result<(), CompositionError>;

    /// Declare that `function` overrides the function of the same name in `parent`.
    fn add_override(&mut self, parent: &str, function: &FunctionRef) -> Result<(), CompositionError>;

    /// Attach a modifier invocation (e.g., `onlyOwner`) to a function.
    fn add_modifier(&mut self, modifier: &str, function: &FunctionRef) -> Result<(), CompositionError>;

    /// Declare a state variable. Returns `true` when newly inserted,
    /// `false` when an identical declaration already exists.
    fn add_variable(&mut self, variable: Variable) -> Result<bool, CompositionError>;

    /// Add a parameter to the contract's own constructor.
    fn add_constructor_argument(&mut self, arg: FunctionArgument) -> Result<(), CompositionError>;

    /// Append a statement to the constructor body.
    fn add_constructor_code(&mut self, code: &str);

    fn set_license(&mut self, license: &str);

    fn add_natspec_tag(&mut self, key: &str, value: &str);
}

/// The single concrete [`ContractComposer`]: owns one [`Contract`] for one build.
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    contract: Contract,
}

impl ContractBuilder {
    /// Start a fresh model. The name must be a valid identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, CompositionError> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(CompositionError::InvalidIdentifier(name));
        }
        Ok(Self {
            contract: Contract::new(name),
        })
    }

    /// Read-only view of the model built so far.
    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Finish composition and hand out the model.
    pub fn build(self) -> Contract {
        self.contract
    }

    /// Fetch the function entry for `function`, creating it from its declared shape.
    fn function_entry(&mut self, function: &FunctionRef) -> Result<&mut Function, CompositionError> {
        let signature = function.signature();
        if let Some(existing) = self.contract.functions.get(&signature) {
            existing.declaration.check_compatible(function)?;
        }
        Ok(self
            .contract
            .functions
            .entry(signature)
            .or_insert_with(|| Function::new(function.clone())))
    }
}

impl ContractComposer for ContractBuilder {
    fn add_parent(&mut self, parent: Parent, args: Option<Vec<Value>>) -> Result<(), CompositionError> {
        let Some(existing) = self
            .contract
            .parents
            .iter_mut()
            .find(|p| p.parent.name == parent.name)
        else {
            debug!(parent = %parent.name, path = %parent.path, "adding parent");
            self.contract.parents.push(ParentEntry { parent, args });
            return Ok(());
        };

        if existing.parent.path != parent.path {
            return Err(CompositionError::AmbiguousImport {
                name: parent.name,
                existing: existing.parent.path.clone(),
                requested: parent.path,
            });
        }

        if let Some(requested) = args {
            if existing.args.is_none() {
                existing.args = Some(requested);
            } else if existing.args.as_ref() != Some(&requested) {
                return Err(CompositionError::ConflictingConstructorArgs {
                    name: parent.name,
                    existing: existing.args.clone().unwrap_or_default(),
                    requested,
                });
            }
        }

        for base in parent.bases {
            if !existing.parent.bases.contains(&base) {
                existing.parent.bases.push(base);
            }
        }
        Ok(())
    }

    fn add_function_code(&mut self, code: &str, function: &FunctionRef) -> Result<(), CompositionError> {
        debug!(function = %function.signature(), code, "adding function code");
        self.function_entry(function)?.code.push(code.to_string());
        Ok(())
    }

    fn add_override(&mut self, parent: &str, function: &FunctionRef) -> Result<(), CompositionError> {
        if self.contract.parent(parent).is_none() {
            return Err(CompositionError::UnknownParent {
                parent: parent.to_string(),
                signature: function.signature(),
            });
        }
        debug!(function = %function.signature(), parent, "adding override");
        self.function_entry(function)?
            .overrides
            .insert(parent.to_string());
        Ok(())
    }

    fn add_modifier(&mut self, modifier: &str, function: &FunctionRef) -> Result<(), CompositionError> {
        self.function_entry(function)?
            .modifiers
            .insert(modifier.to_string());
        Ok(())
    }

    fn add_variable(&mut self, variable: Variable) -> Result<bool, CompositionError> {
        match self.contract.variables.get(&variable.name) {
            Some(existing) if *existing == variable => Ok(false),
            Some(existing) => Err(CompositionError::DuplicateVariable {
                name: variable.name.clone(),
                existing: existing.to_string(),
                requested: variable.to_string(),
            }),
            None => {
                debug!(variable = %variable.name, "adding variable");
                self.contract
                    .variables
                    .insert(variable.name.clone(), variable);
                Ok(true)
            }
        }
    }

    fn add_constructor_argument(&mut self, arg: FunctionArgument) -> Result<(), CompositionError> {
        match self
            .contract
            .constructor_args
            .iter()
            .find(|a| a.name == arg.name)
        {
            Some(existing) if existing.ty == arg.ty => Ok(()),
            Some(existing) => Err(CompositionError::DuplicateConstructorArgument {
                name: arg.name.clone(),
                existing: existing.ty.clone(),
                requested: arg.ty,
            }),
            None => {
                self.contract.constructor_args.push(arg);
                Ok(())
            }
        }
    }

    fn add_constructor_code(&mut self, code: &str) {
        self.contract.constructor_code.push(code.to_string());
    }

    fn set_license(&mut self, license: &str) {
        self.contract.license = license.to_string();
    }

    fn add_natspec_tag(&mut self, key: &str, value: &str) {
        self.contract.natspec_tags.push(NatspecTag {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{FunctionDef, Mutability};
    use pretty_assertions::assert_eq;

    fn erc20() -> Parent {
        Parent::new("ERC20", "contracts/ERC20.sol")
    }

    fn hook() -> FunctionRef {
        FunctionDef::internal()
            .arg("from", "address")
            .arg("to", "address")
            .arg("amount", "uint256")
            .named("_beforeTokenTransfer")
    }

    #[test]
    fn test_rejects_invalid_name() {
        let err = ContractBuilder::new("My Token").unwrap_err();
        assert_eq!(err, CompositionError::InvalidIdentifier("My Token".into()));
    }

    #[test]
    fn test_add_parent_idempotent() {
        let mut once = ContractBuilder::new("MyToken").unwrap();
        once.add_parent(erc20(), Some(vec![Value::string("MyToken")])).unwrap();

        let mut twice = ContractBuilder::new("MyToken").unwrap();
        twice.add_parent(erc20(), Some(vec![Value::string("MyToken")])).unwrap();
        twice.add_parent(erc20(), Some(vec![Value::string("MyToken")])).unwrap();

        assert_eq!(once.build(), twice.build());
    }

    #[test]
    fn test_add_parent_ambiguous_import() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(erc20(), None).unwrap();
        let err = c
            .add_parent(Parent::new("ERC20", "other/ERC20.sol"), None)
            .unwrap_err();
        assert!(matches!(err, CompositionError::AmbiguousImport { ref name, .. } if name == "ERC20"));
        assert_eq!(c.contract().parents().len(), 1);
    }

    #[test]
    fn test_add_parent_conflicting_args() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(erc20(), Some(vec![Value::string("A")])).unwrap();
        let err = c
            .add_parent(erc20(), Some(vec![Value::string("B")]))
            .unwrap_err();
        assert!(matches!(err, CompositionError::ConflictingConstructorArgs { .. }));
    }

    #[test]
    fn test_add_parent_late_args_recorded() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(erc20(), None).unwrap();
        c.add_parent(erc20(), Some(vec![Value::string("A")])).unwrap();
        c.add_parent(erc20(), None).unwrap();
        assert_eq!(
            c.contract().parent("ERC20").unwrap().args(),
            Some(&[Value::string("A")][..])
        );
    }

    #[test]
    fn test_add_parent_unions_bases() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(Parent::new("X", "x.sol").extends("A"), None).unwrap();
        c.add_parent(Parent::new("X", "x.sol").extends("B"), None).unwrap();
        assert_eq!(c.contract().parent("X").unwrap().bases(), ["A", "B"]);
    }

    #[test]
    fn test_function_code_appends_in_order() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_function_code("first();", &hook()).unwrap();
        c.add_function_code("second();", &hook()).unwrap();
        let f = c
            .contract()
            .function("_beforeTokenTransfer(address,address,uint256)")
            .unwrap();
        assert_eq!(f.code(), ["first();", "second();"]);
    }

    #[test]
    fn test_incompatible_function_declaration() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        let view = FunctionDef::public().mutability(Mutability::View).named("cap");
        let pure = FunctionDef::public().mutability(Mutability::Pure).named("cap");
        c.add_function_code("return 1;", &view).unwrap();
        let err = c.add_function_code("return 2;", &pure).unwrap_err();
        assert!(matches!(err, CompositionError::IncompatibleFunctionDeclaration { .. }));
        assert_eq!(c.contract().function("cap()").unwrap().code(), ["return 1;"]);
    }

    #[test]
    fn test_override_requires_known_parent() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        let err = c.add_override("ERC20", &hook()).unwrap_err();
        assert_eq!(
            err,
            CompositionError::UnknownParent {
                parent: "ERC20".into(),
                signature: "_beforeTokenTransfer(address,address,uint256)".into(),
            }
        );
    }

    #[test]
    fn test_override_set_accumulates() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_parent(erc20(), None).unwrap();
        c.add_parent(Parent::new("ERC20Pausable", "p.sol"), None).unwrap();
        c.add_override("ERC20", &hook()).unwrap();
        c.add_override("ERC20Pausable", &hook()).unwrap();
        c.add_override("ERC20", &hook()).unwrap();
        let f = c.contract().functions().next().unwrap();
        let overrides: Vec<&str> = f.overrides().iter().map(String::as_str).collect();
        assert_eq!(overrides, ["ERC20", "ERC20Pausable"]);
    }

    #[test]
    fn test_add_variable() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        assert!(c.add_variable(Variable::new("counter", "uint256")).unwrap());
        assert!(!c.add_variable(Variable::new("counter", "uint256")).unwrap());
        let err = c.add_variable(Variable::new("counter", "bytes32")).unwrap_err();
        assert!(matches!(err, CompositionError::DuplicateVariable { ref name, .. } if name == "counter"));
    }

    #[test]
    fn test_constructor_argument_conflict() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        c.add_constructor_argument(FunctionArgument::new("owner", "address")).unwrap();
        c.add_constructor_argument(FunctionArgument::new("owner", "address")).unwrap();
        assert_eq!(c.contract().constructor_args().len(), 1);
        assert!(c
            .add_constructor_argument(FunctionArgument::new("owner", "uint256"))
            .is_err());
    }

    #[test]
    fn test_modifiers_dedup() {
        let mut c = ContractBuilder::new("MyToken").unwrap();
        let pause = FunctionDef::public().named("pause");
        c.add_modifier("onlyOwner", &pause).unwrap();
        c.add_modifier("onlyOwner", &pause).unwrap();
        let modifiers: Vec<&str> = c.contract().function("pause()").unwrap().modifiers().collect();
        assert_eq!(modifiers, ["onlyOwner"]);
    }
}
