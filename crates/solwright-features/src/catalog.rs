use serde::{Deserialize, Serialize};
use solwright_model::Parent;

/// Import prefix used when options do not name one.
pub const DEFAULT_IMPORT_PREFIX: &str = "@solwright/contracts";

/// Target chain family; selects the token standard and its parent contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Network {
    #[default]
    Ethereum,
    BinanceSmartChain,
}

impl Network {
    /// Name as written in the options file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::BinanceSmartChain => "binanceSmartChain",
        }
    }

    /// Token standard name, also the name of the token base contract.
    pub fn standard(&self) -> &'static str {
        match self {
            Self::Ethereum => "ERC20",
            Self::BinanceSmartChain => "BEP20",
        }
    }

    fn directory(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum/erc20",
            Self::BinanceSmartChain => "binanceSmartChain/bep20",
        }
    }
}

/// Parent contracts layered on top of the token base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Burnable,
    Freezable,
    Pausable,
    Lockable,
    Capped,
    BatchTransferable,
    Permit,
}

impl Module {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Burnable => "Burnable",
            Self::Freezable => "Freezable",
            Self::Pausable => "Pausable",
            Self::Lockable => "Lockable",
            Self::Capped => "Capped",
            Self::BatchTransferable => "BatchTransferable",
            Self::Permit => "Permit",
        }
    }
}

/// Read-only lookup of parent contracts for one network and import prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    network: Network,
    prefix: String,
}

impl Catalog {
    pub fn new(network: Network, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim_end_matches('/');
        let prefix = if prefix.is_empty() {
            DEFAULT_IMPORT_PREFIX
        } else {
            prefix
        };
        Self {
            network,
            prefix: prefix.to_string(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the token base contract (`ERC20`, `BEP20`).
    pub fn standard(&self) -> &'static str {
        self.network.standard()
    }

    pub fn token(&self) -> Parent {
        let standard = self.standard();
        Parent::new(
            standard,
            format!("{}/{}/{}.sol", self.prefix, self.network.directory(), standard),
        )
    }

    /// Feature parent, e.g. `ERC20Pausable`, extending the token base.
    pub fn feature(&self, module: Module) -> Parent {
        let name = self.feature_name(module);
        let path = format!(
            "{}/{}/features/{}.sol",
            self.prefix,
            self.network.directory(),
            name
        );
        Parent::new(name, path).extends(self.standard())
    }

    pub fn feature_name(&self, module: Module) -> String {
        format!("{}{}", self.standard(), module.suffix())
    }

    pub fn ownable(&self) -> Parent {
        Parent::new("Ownable", format!("{}/access/Ownable.sol", self.prefix))
    }

    pub fn access_control(&self) -> Parent {
        Parent::new(
            "AccessControl",
            format!("{}/access/AccessControl.sol", self.prefix),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Network::default(), DEFAULT_IMPORT_PREFIX)
    }
}
