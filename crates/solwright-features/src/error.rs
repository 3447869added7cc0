use solwright_codegen::CodegenError;
use solwright_model::CompositionError;
use thiserror::Error;

/// Invalid token options, reported before any composition happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("token name {0:?} does not yield a valid contract identifier")]
    InvalidName(String),

    #[error("token symbol {0:?} must be a non-empty single line")]
    InvalidSymbol(String),

    #[error("{field}: {value:?} is not a valid decimal amount")]
    InvalidAmount { field: &'static str, value: String },

    #[error("{field}: {value:?} has more than {max} decimal places")]
    TooManyDecimals {
        field: &'static str,
        value: String,
        max: usize,
    },

    #[error("premint recipient {0:?} must be 'msg.sender' or a 0x-prefixed 20-byte address")]
    InvalidRecipient(String),

    #[error("premint {premint} exceeds cap {cap}")]
    PremintExceedsCap { premint: String, cap: String },

    #[error("license {0:?} must be a single line without control characters")]
    InvalidLicense(String),

    #[error("security contact {0:?} must be a single line without control characters")]
    InvalidSecurityContact(String),

    #[error("import prefix {0:?} must not contain quotes, backslashes or control characters")]
    InvalidImportPrefix(String),
}

/// Any failure of a token build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),

    #[error("composition failed: {0}")]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}
