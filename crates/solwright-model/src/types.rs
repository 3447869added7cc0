use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::function::{Function, FunctionArgument};

/// A constructor argument expression forwarded to a parent contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// String literal, printed quoted and escaped
    String(String),
    /// Unsigned integer literal
    Number(u64),
    /// Raw expression text, printed verbatim (e.g., `msg.sender`)
    Expr(String),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn expr(s: impl Into<String>) -> Self {
        Value::Expr(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => {
                // Plain Solidity string literals only accept printable ASCII.
                if !s.is_ascii() {
                    f.write_str("unicode")?;
                }
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c if c.is_control() && c.is_ascii() => write!(f, "\\x{:02x}", c as u32)?,
                        c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Value::Number(n) => write!(f, "{n}"),
            Value::Expr(e) => f.write_str(e),
        }
    }
}

/// Descriptor of a parent contract as provided by a registrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    /// Contract name (e.g., "ERC20Pausable")
    pub name: String,
    /// Import path of the source file declaring it
    pub path: String,
    /// Names of the contracts this parent extends
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<String>,
}

impl Parent {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            bases: Vec::new(),
        }
    }

    /// Declare that this parent extends `base`.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        if !self.bases.contains(&base) {
            self.bases.push(base);
        }
        self
    }
}

/// A parent as recorded in the contract, with the arguments forwarded to its constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentEntry {
    #[serde(flatten)]
    pub(crate) parent: Parent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) args: Option<Vec<Value>>,
}

impl ParentEntry {
    pub fn name(&self) -> &str {
        &self.parent.name
    }

    pub fn path(&self) -> &str {
        &self.parent.path
    }

    pub fn bases(&self) -> &[String] {
        &self.parent.bases
    }

    /// Constructor arguments, if any registrar supplied them.
    pub fn args(&self) -> Option<&[Value]> {
        self.args.as_deref()
    }
}

/// State variable visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Internal,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }
}

/// How a state variable is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    #[default]
    Mutable,
    Constant,
    Immutable,
}

impl Storage {
    /// Keyword emitted after the visibility, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Storage::Mutable => None,
            Storage::Constant => Some("constant"),
            Storage::Immutable => Some("immutable"),
        }
    }
}

/// A contract state variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::default(),
            storage: Storage::default(),
            initializer: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn constant(mut self, initializer: impl Into<String>) -> Self {
        self.storage = Storage::Constant;
        self.initializer = Some(initializer.into());
        self
    }

    pub fn initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.visibility.as_str())?;
        if let Some(kw) = self.storage.keyword() {
            write!(f, " {kw}")?;
        }
        write!(f, " {}", self.name)?;
        if let Some(init) = &self.initializer {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// A NatSpec tag printed above the contract declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatspecTag {
    pub key: String,
    pub value: String,
}

/// The in-memory model of one contract under construction.
///
/// Mutated only through [`crate::ContractBuilder`]; read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub(crate) name: String,
    pub(crate) license: String,
    pub(crate) natspec_tags: Vec<NatspecTag>,
    pub(crate) parents: Vec<ParentEntry>,
    pub(crate) functions: IndexMap<String, Function>,
    pub(crate) variables: IndexMap<String, Variable>,
    pub(crate) constructor_args: Vec<FunctionArgument>,
    pub(crate) constructor_code: Vec<String>,
}

pub const DEFAULT_LICENSE: &str = "MIT";

impl Contract {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            license: DEFAULT_LICENSE.to_string(),
            natspec_tags: Vec::new(),
            parents: Vec::new(),
            functions: IndexMap::new(),
            variables: IndexMap::new(),
            constructor_args: Vec::new(),
            constructor_code: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn natspec_tags(&self) -> &[NatspecTag] {
        &self.natspec_tags
    }

    /// Parents in declaration order (not linearized).
    pub fn parents(&self) -> &[ParentEntry] {
        &self.parents
    }

    pub fn parent(&self, name: &str) -> Option<&ParentEntry> {
        self.parents.iter().find(|p| p.name() == name)
    }

    /// Functions in registration order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    /// Look up a function by signature (e.g., `freeze(address)`).
    pub fn function(&self, signature: &str) -> Option<&Function> {
        self.functions.get(signature)
    }

    /// Variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn constructor_args(&self) -> &[FunctionArgument] {
        &self.constructor_args
    }

    pub fn constructor_code(&self) -> &[String] {
        &self.constructor_code
    }
}
