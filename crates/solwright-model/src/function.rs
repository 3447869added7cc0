use std::fmt;
use std::ops::Index;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::CompositionError;

/// Function visibility kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Internal,
    Public,
    External,
    Private,
}

impl FunctionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Internal => "internal",
            FunctionKind::Public => "public",
            FunctionKind::External => "external",
            FunctionKind::Private => "private",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State mutability of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    #[default]
    Nonpayable,
    View,
    Pure,
    Payable,
}

impl Mutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutability::Nonpayable => "nonpayable",
            Mutability::View => "view",
            Mutability::Pure => "pure",
            Mutability::Payable => "payable",
        }
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, named function or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl FunctionArgument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Declared shape of a function, without its name.
///
/// Fed to [`define_functions`] to produce [`FunctionRef`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    kind: FunctionKind,
    args: Vec<FunctionArgument>,
    mutability: Mutability,
    returns: Vec<String>,
}

impl FunctionDef {
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
            mutability: Mutability::default(),
            returns: Vec::new(),
        }
    }

    pub fn public() -> Self {
        Self::new(FunctionKind::Public)
    }

    pub fn internal() -> Self {
        Self::new(FunctionKind::Internal)
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(FunctionArgument::new(name, ty));
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns.push(ty.into());
        self
    }

    /// Attach a name, producing the identity key registrars share.
    pub fn named(self, name: impl Into<String>) -> FunctionRef {
        FunctionRef {
            name: name.into(),
            args: self.args,
            kind: self.kind,
            mutability: self.mutability,
            returns: self.returns,
        }
    }
}

/// Stable identity of a function shared across independent registrars.
///
/// Compared structurally. The join key inside a contract is [`FunctionRef::signature`];
/// the remaining fields are the declared shape, which must agree between registrars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionRef {
    name: String,
    args: Vec<FunctionArgument>,
    kind: FunctionKind,
    mutability: Mutability,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    returns: Vec<String>,
}

impl FunctionRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[FunctionArgument] {
        &self.args
    }

    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn returns(&self) -> &[String] {
        &self.returns
    }

    /// Canonical signature: `name(type1,type2)`.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.args.iter().map(|a| a.ty.as_str()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// Check that `other` (same signature) declares the same shape as `self`.
    pub(crate) fn check_compatible(&self, other: &FunctionRef) -> Result<(), CompositionError> {
        let reason = if self.kind != other.kind {
            format!("kind '{}' vs '{}'", self.kind, other.kind)
        } else if self.mutability != other.mutability {
            format!("mutability '{}' vs '{}'", self.mutability, other.mutability)
        } else if self.returns != other.returns {
            format!(
                "returns ({}) vs ({})",
                self.returns.join(", "),
                other.returns.join(", ")
            )
        } else if self.args != other.args {
            "argument names differ".to_string()
        } else {
            return Ok(());
        };

        Err(CompositionError::IncompatibleFunctionDeclaration {
            signature: self.signature(),
            reason,
        })
    }
}

/// Named collection of [`FunctionRef`]s produced by [`define_functions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSet {
    functions: IndexMap<String, FunctionRef>,
}

impl FunctionSet {
    pub fn get(&self, name: &str) -> Option<&FunctionRef> {
        self.functions.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionRef> {
        self.functions.values()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Panics if `name` was not defined, like indexing an `IndexMap`.
impl Index<&str> for FunctionSet {
    type Output = FunctionRef;

    fn index(&self, name: &str) -> &FunctionRef {
        match self.functions.get(name) {
            Some(f) => f,
            None => panic!("function '{name}' is not defined in this set"),
        }
    }
}

/// Build the identity keys for a group of functions.
///
/// Pure: performs no mutation, so any number of feature modules may call it.
pub fn define_functions<I, S>(defs: I) -> FunctionSet
where
    I: IntoIterator<Item = (S, FunctionDef)>,
    S: Into<String>,
{
    let functions = defs
        .into_iter()
        .map(|(name, def)| {
            let name = name.into();
            (name.clone(), def.named(name))
        })
        .collect();
    FunctionSet { functions }
}

/// A function as accumulated in the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    #[serde(flatten)]
    pub(crate) declaration: FunctionRef,
    pub(crate) code: Vec<String>,
    pub(crate) modifiers: IndexSet<String>,
    pub(crate) overrides: IndexSet<String>,
}

impl Function {
    pub(crate) fn new(declaration: FunctionRef) -> Self {
        Self {
            declaration,
            code: Vec::new(),
            modifiers: IndexSet::new(),
            overrides: IndexSet::new(),
        }
    }

    pub fn declaration(&self) -> &FunctionRef {
        &self.declaration
    }

    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    /// Code fragments in registration order.
    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// Modifiers in registration order.
    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.iter().map(String::as_str)
    }

    pub fn has_modifiers(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Parent names this function overrides, in the order first declared.
    pub fn overrides(&self) -> &IndexSet<String> {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer_hook() -> FunctionRef {
        FunctionDef::internal()
            .arg("from", "address")
            .arg("to", "address")
            .arg("amount", "uint256")
            .named("_beforeTokenTransfer")
    }

    #[test]
    fn test_signature() {
        assert_eq!(
            transfer_hook().signature(),
            "_beforeTokenTransfer(address,address,uint256)"
        );
        assert_eq!(FunctionDef::public().named("pause").signature(), "pause()");
    }

    #[test]
    fn test_define_functions_is_structural() {
        let a = define_functions([("freeze", FunctionDef::public().arg("account", "address"))]);
        let b = define_functions([("freeze", FunctionDef::public().arg("account", "address"))]);
        assert_eq!(a, b);
        assert_eq!(a["freeze"], b["freeze"]);
        assert_eq!(a.len(), 1);
        assert!(a.get("unfreeze").is_none());
    }

    #[test]
    #[should_panic(expected = "not defined")]
    fn test_index_unknown_function_panics() {
        let set = define_functions([("pause", FunctionDef::public())]);
        let _ = &set["unpause"];
    }

    #[test]
    fn test_check_compatible_mutability() {
        let a = FunctionDef::public().named("total");
        let b = FunctionDef::public().mutability(Mutability::View).named("total");
        let err = a.check_compatible(&b).unwrap_err();
        assert!(matches!(
            err,
            CompositionError::IncompatibleFunctionDeclaration { ref signature, .. } if signature == "total()"
        ));
        assert!(a.check_compatible(&a.clone()).is_ok());
    }

    #[test]
    fn test_check_compatible_kind() {
        let a = FunctionDef::public().named("burn");
        let b = FunctionDef::internal().named("burn");
        assert!(a.check_compatible(&b).is_err());
    }
}
