use serde::{Deserialize, Serialize};
use solwright_model::{CompositionError, ContractComposer, FunctionRef, Variable, Visibility};
use tracing::{debug, warn};

use crate::catalog::Catalog;

/// How privileged functions are guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    #[default]
    None,
    Ownable,
    Roles,
}

impl Access {
    /// Name as written in the options file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ownable => "ownable",
            Self::Roles => "roles",
        }
    }
}

/// Declare the access-control parent chosen by the options.
///
/// `Roles` also grants the admin role to the deployer.
pub fn set_access_control(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    access: Access,
) -> Result<(), CompositionError> {
    match access {
        Access::None => Ok(()),
        Access::Ownable => c.add_parent(catalog.ownable(), None),
        Access::Roles => {
            c.add_parent(catalog.access_control(), None)?;
            c.add_constructor_code("_grantRole(DEFAULT_ADMIN_ROLE, msg.sender);");
            Ok(())
        }
    }
}

/// Guard `function` with `access`, using `role` (e.g. `PAUSER`) for role-based access.
pub fn require_access_control(
    c: &mut dyn ContractComposer,
    catalog: &Catalog,
    function: &FunctionRef,
    access: Access,
    role: &str,
) -> Result<(), CompositionError> {
    let access = match access {
        Access::None => {
            warn!(function = function.name(), "access control required, using ownable");
            Access::Ownable
        }
        other => other,
    };

    match access {
        Access::Roles => {
            c.add_parent(catalog.access_control(), None)?;
            let role_id = format!("{}_ROLE", role);
            let variable = Variable::new(&role_id, "bytes32")
                .visibility(Visibility::Public)
                .constant(format!("keccak256(\"{}\")", role_id));
            if c.add_variable(variable)? {
                debug!(role = %role_id, "granting role to deployer");
                c.add_constructor_code(&format!("_grantRole({}, msg.sender);", role_id));
            }
            c.add_modifier(&format!("onlyRole({})", role_id), function)
        }
        _ => {
            c.add_parent(catalog.ownable(), None)?;
            c.add_modifier("onlyOwner", function)
        }
    }
}
