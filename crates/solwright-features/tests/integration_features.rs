use std::path::PathBuf;

use pretty_assertions::assert_eq;

use solwright_features::{build_erc20, print_erc20, Access, BuildError, Erc20Options, OptionsError};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("fixtures")
}

fn load_options(fixture: &str) -> Erc20Options {
    let path = fixtures_dir().join(fixture);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture '{}': {}", fixture, e));
    Erc20Options::from_json(&json)
        .unwrap_or_else(|e| panic!("Failed to parse fixture '{}': {}", fixture, e))
}

#[test]
fn test_golden_roles_capped_token() {
    let options = load_options("roles-capped.json");
    insta::assert_snapshot!(print_erc20(&options).unwrap(), @r###"
// SPDX-License-Identifier: Apache-2.0
pragma solidity ^0.8.17;

import "@solwright/contracts/access/AccessControl.sol";
import "@solwright/contracts/ethereum/erc20/ERC20.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Burnable.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Capped.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Freezable.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Permit.sol";

/// @custom:security-contact security@solwright.dev
contract SolwrightCoin is ERC20, ERC20Capped, ERC20Burnable, ERC20Freezable, AccessControl, ERC20Permit {
    bytes32 public constant FREEZER_ROLE = keccak256("FREEZER_ROLE");
    bytes32 public constant MINTER_ROLE = keccak256("MINTER_ROLE");

    constructor()
        ERC20("Solwright Coin", "SWC")
        ERC20Capped(2000000 * 10 ** 18)
        ERC20Permit("Solwright Coin")
    {
        _mint(msg.sender, 10005 * 10 ** 17);
        _grantRole(FREEZER_ROLE, msg.sender);
        _grantRole(MINTER_ROLE, msg.sender);
        _grantRole(DEFAULT_ADMIN_ROLE, msg.sender);
    }

    function freeze(address account) public onlyRole(FREEZER_ROLE) {
        _freeze(account);
    }

    function unfreeze(address account) public onlyRole(FREEZER_ROLE) {
        _unfreeze(account);
    }

    function mint(address to, uint256 amount) public onlyRole(MINTER_ROLE) {
        _mint(to, amount);
    }

    // The following functions are overrides required by Solidity.

    function _beforeTokenTransfer(address from, address to, uint256 amount)
        internal
        override(ERC20, ERC20Freezable)
    {
        super._beforeTokenTransfer(from, to, amount);
    }

    function _mint(address account, uint256 amount)
        internal
        override(ERC20, ERC20Capped)
    {
        super._mint(account, amount);
    }
}
"###);
}

#[test]
fn test_golden_ownable_pausable_token() {
    let mut options = Erc20Options {
        premint: "1000".to_string(),
        ..Erc20Options::default()
    };
    options.features.burnable = true;
    options.features.pausable = true;

    let expected = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.17;

import "@solwright/contracts/access/Ownable.sol";
import "@solwright/contracts/ethereum/erc20/ERC20.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Burnable.sol";
import "@solwright/contracts/ethereum/erc20/features/ERC20Pausable.sol";

contract MyToken is ERC20, ERC20Burnable, ERC20Pausable, Ownable {
    constructor() ERC20("MyToken", "MTK") {
        _mint(msg.sender, 1000 * 10 ** 18);
    }

    function pause() public onlyOwner {
        _pause();
    }

    function unpause() public onlyOwner {
        _unpause();
    }

    // The following functions are overrides required by Solidity.

    function _beforeTokenTransfer(address from, address to, uint256 amount)
        internal
        override(ERC20, ERC20Pausable)
    {
        super._beforeTokenTransfer(from, to, amount);
    }
}
"#;
    assert_eq!(print_erc20(&options).unwrap(), expected);
}

#[test]
fn test_bsc_token_uses_bep20_catalog() {
    let options = load_options("bsc-pausable.json");
    let out = print_erc20(&options).unwrap();

    assert!(out.contains(
        "contract BinancePeggedCoin is BEP20, BEP20Pausable, Ownable, BEP20Lockable, BEP20BatchTransferable {"
    ));
    assert!(out.contains("import \"@solwright/contracts/binanceSmartChain/bep20/BEP20.sol\";"));
    assert!(out.contains("constructor() BEP20(\"Binance Pegged Coin\", \"BPC\") {"));
    assert!(out.contains("_mint(0x5B38Da6a701c568545dCfcB03FcB875f56beddC4, 500 * 10 ** 18);"));
    assert!(out.contains("override(BEP20, BEP20Pausable, BEP20Lockable)"));
    assert!(out.contains(
        "function lock(address account, uint256 amount, uint256 releaseTime)\n        public\n        onlyOwner\n    {"
    ));
    assert!(out.contains("_unlock(account);"));
    assert!(!out.contains("ERC20"));
}

#[test]
fn test_access_none_falls_back_to_ownable() {
    let options = load_options("bsc-pausable.json");
    assert_eq!(options.access, Access::None);

    let contract = build_erc20(&options).unwrap();
    assert!(contract.parent("Ownable").is_some());
    assert!(contract.parent("AccessControl").is_none());
}

#[test]
fn test_premint_over_cap_is_rejected() {
    let options = load_options("premint-over-cap.json");
    match build_erc20(&options) {
        Err(BuildError::Options(OptionsError::PremintExceedsCap { premint, cap })) => {
            assert_eq!(premint, "1000001");
            assert_eq!(cap, "1000000");
        }
        other => panic!("Expected PremintExceedsCap, got: {:?}", other),
    }
}

#[test]
fn test_malformed_fixture_fails_to_parse() {
    let path = fixtures_dir().join("malformed.json");
    let json = std::fs::read_to_string(path).unwrap();
    assert!(Erc20Options::from_json(&json).is_err());
}

#[test]
fn test_same_options_print_identically() {
    let options = load_options("roles-capped.json");
    assert_eq!(print_erc20(&options).unwrap(), print_erc20(&options).unwrap());
}
