//! ERC20-style token assembly.
//!
//! Each feature lives in its own registrar; [`build_erc20`] applies them in a
//! fixed order so equal options always produce equal contracts.

pub mod base;
pub mod capped;
pub mod extensions;
pub mod freezable;
pub mod lockable;
pub mod mintable;
pub mod pausable;

use solwright_codegen::print_contract;
use solwright_model::{Contract, ContractBuilder};
use tracing::{debug, info};

use crate::access::set_access_control;
use crate::error::BuildError;
use crate::info::set_info;
use crate::options::{Cap, Erc20Options, Supply};

pub use base::{add_base, add_premint};
pub use capped::add_capped;
pub use extensions::{add_batch_transferable, add_burnable, add_permit};
pub use freezable::add_freezable;
pub use lockable::add_lockable;
pub use mintable::add_mintable;
pub use pausable::add_pausable;

/// Compose the token contract described by `options`.
pub fn build_erc20(options: &Erc20Options) -> Result<Contract, BuildError> {
    let config = options.resolve()?;
    let catalog = &config.catalog;
    let features = &config.features;
    info!(
        contract = %config.contract_name,
        standard = catalog.standard(),
        "building token"
    );

    let mut c = ContractBuilder::new(&config.contract_name)?;

    add_base(&mut c, catalog, &config.token_name, &config.symbol)?;

    if let Cap::Capped(cap) = &config.cap {
        add_capped(&mut c, catalog, cap)?;
    }

    if let Supply::Premint { amount, recipient } = &config.supply {
        add_premint(&mut c, amount, recipient);
    }

    if features.burnable {
        add_burnable(&mut c, catalog)?;
    }

    if features.freezable {
        add_freezable(&mut c, catalog, config.access)?;
    }

    if features.pausable {
        add_pausable(&mut c, catalog, config.access)?;
    }

    if features.mintable {
        add_mintable(&mut c, catalog, config.access)?;
    }

    if features.lockable {
        add_lockable(&mut c, catalog, config.access)?;
    }

    if features.batch_transferable {
        add_batch_transferable(&mut c, catalog)?;
    }

    if features.permit {
        add_permit(&mut c, catalog, &config.token_name)?;
    }

    set_access_control(&mut c, catalog, config.access)?;
    set_info(&mut c, &config.info);

    let contract = c.build();
    debug!(
        parents = contract.parents().len(),
        functions = contract.functions().count(),
        "token composed"
    );
    Ok(contract)
}

/// Compose and print the token contract described by `options`.
pub fn print_erc20(options: &Erc20Options) -> Result<String, BuildError> {
    let contract = build_erc20(options)?;
    Ok(print_contract(&contract)?)
}

/// Whether the selected features expose functions that need a guard.
pub fn is_access_control_required(options: &Erc20Options) -> bool {
    options.features.requires_access_control()
}
