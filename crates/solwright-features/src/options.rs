//! Token options as read from JSON, and their validated form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use solwright_model::identifier::to_identifier;
use tracing::warn;

use crate::access::Access;
use crate::amount::Amount;
use crate::catalog::{Catalog, Network, DEFAULT_IMPORT_PREFIX};
use crate::error::OptionsError;
use crate::info::Info;

pub const DEFAULT_RECIPIENT: &str = "msg.sender";

/// `msg.sender` or a 20-byte hex address. The EIP-55 checksum of an address
/// is not verified here; solc rejects literals with a bad checksum.
static RECIPIENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(msg\.sender|0x[0-9a-fA-F]{40})$").expect("valid recipient regex")
});

/// Optional token capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub burnable: bool,
    pub freezable: bool,
    pub pausable: bool,
    pub mintable: bool,
    pub lockable: bool,
    pub batch_transferable: bool,
    pub permit: bool,
}

impl Features {
    /// Whether any selected feature exposes a privileged function.
    pub fn requires_access_control(&self) -> bool {
        self.mintable || self.pausable || self.freezable || self.lockable
    }
}

/// User-facing token options. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20Options {
    pub network: Network,
    pub name: String,
    pub symbol: String,
    pub premint: String,
    pub premint_recipient: String,
    pub cap: String,
    pub features: Features,
    pub access: Access,
    pub info: Info,
    pub import_prefix: String,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            network: Network::default(),
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            premint: "0".to_string(),
            premint_recipient: DEFAULT_RECIPIENT.to_string(),
            cap: "0".to_string(),
            features: Features::default(),
            access: Access::default(),
            info: Info::default(),
            import_prefix: DEFAULT_IMPORT_PREFIX.to_string(),
        }
    }
}

/// Initial token supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Supply {
    None,
    Premint { amount: Amount, recipient: String },
}

/// Upper bound on total supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum Cap {
    Uncapped,
    Capped(Amount),
}

/// Options after validation and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Config {
    pub contract_name: String,
    pub token_name: String,
    pub symbol: String,
    pub supply: Supply,
    pub cap: Cap,
    pub features: Features,
    pub access: Access,
    pub info: Info,
    #[serde(skip)]
    pub catalog: Catalog,
}

impl Erc20Options {
    /// Load options from a JSON string; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate and normalize into an [`Erc20Config`].
    pub fn resolve(&self) -> Result<Erc20Config, OptionsError> {
        let contract_name = to_identifier(&self.name);
        if contract_name.is_empty() {
            return Err(OptionsError::InvalidName(self.name.clone()));
        }

        let symbol = self.symbol.trim();
        if symbol.is_empty() || symbol.contains('\n') {
            return Err(OptionsError::InvalidSymbol(self.symbol.clone()));
        }

        let license = self.info.license.trim();
        if has_control(license) {
            return Err(OptionsError::InvalidLicense(self.info.license.clone()));
        }

        let security_contact = self.info.security_contact.trim();
        if has_control(security_contact) {
            return Err(OptionsError::InvalidSecurityContact(
                self.info.security_contact.clone(),
            ));
        }

        let import_prefix = self.import_prefix.trim();
        if has_control(import_prefix) || import_prefix.contains(['"', '\\']) {
            return Err(OptionsError::InvalidImportPrefix(self.import_prefix.clone()));
        }

        let premint = Amount::parse("premint", &self.premint)?;
        let cap = Amount::parse("cap", &self.cap)?;
        if !cap.is_zero() && premint > cap {
            return Err(OptionsError::PremintExceedsCap {
                premint: premint.to_string(),
                cap: cap.to_string(),
            });
        }

        let supply = if premint.is_zero() {
            Supply::None
        } else {
            let recipient = self.premint_recipient.trim();
            if !RECIPIENT_PATTERN.is_match(recipient) {
                return Err(OptionsError::InvalidRecipient(self.premint_recipient.clone()));
            }
            if let Some(hex) = recipient.strip_prefix("0x") {
                if hex.chars().any(|c| c.is_ascii_alphabetic()) {
                    warn!(recipient, "address checksum is not verified");
                }
            }
            Supply::Premint {
                amount: premint,
                recipient: recipient.to_string(),
            }
        };

        let cap = if cap.is_zero() {
            Cap::Uncapped
        } else {
            Cap::Capped(cap)
        };

        let access = if self.access == Access::None && self.features.requires_access_control() {
            warn!("selected features need access control, defaulting to ownable");
            Access::Ownable
        } else {
            self.access
        };

        Ok(Erc20Config {
            contract_name,
            token_name: self.name.clone(),
            symbol: symbol.to_string(),
            supply,
            cap,
            features: self.features,
            access,
            info: Info {
                license: if license.is_empty() {
                    Info::default().license
                } else {
                    license.to_string()
                },
                security_contact: security_contact.to_string(),
            },
            catalog: Catalog::new(self.network, import_prefix),
        })
    }
}

fn has_control(text: &str) -> bool {
    text.chars().any(char::is_control)
}
