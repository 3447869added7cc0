use serde::{Deserialize, Serialize};
use solwright_model::{types::DEFAULT_LICENSE, ContractComposer};

pub const SECURITY_CONTACT_TAG: &str = "@custom:security-contact";

/// License and NatSpec metadata written into the contract header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Info {
    pub license: String,
    pub security_contact: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            license: DEFAULT_LICENSE.to_string(),
            security_contact: String::new(),
        }
    }
}

pub fn set_info(c: &mut dyn ContractComposer, info: &Info) {
    if !info.license.is_empty() {
        c.set_license(&info.license);
    }
    if !info.security_contact.is_empty() {
        c.add_natspec_tag(SECURITY_CONTACT_TAG, &info.security_contact);
    }
}
