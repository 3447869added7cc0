/// Solidity keywords and elementary type names that cannot name a contract.
const RESERVED: &[&str] = &[
    "abstract", "address", "anonymous", "as", "assembly", "bool", "break", "bytes", "calldata",
    "catch", "constant", "constructor", "continue", "contract", "delete", "do", "else", "emit",
    "enum", "event", "external", "fallback", "false", "for", "function", "if", "immutable",
    "import", "indexed", "interface", "internal", "is", "library", "mapping", "memory",
    "modifier", "new", "override", "payable", "pragma", "private", "public", "pure", "receive",
    "return", "returns", "revert", "storage", "string", "struct", "this", "true", "try", "type",
    "uint", "uint256", "int", "int256", "unchecked", "using", "view", "virtual", "while",
];

/// Whether `name` is usable as a Solidity identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED.contains(&name)
}

/// Derive a contract identifier from a human-readable token name.
///
/// Leading characters that cannot start an identifier are dropped, the first
/// letter is capitalized, and each run of non-word characters is removed with
/// the following character capitalized: `"my token-2"` → `"MyToken2"`.
pub fn to_identifier(name: &str) -> String {
    let trimmed = name.trim_start_matches(|c: char| !(c.is_ascii_alphabetic() || c == '_' || c == '$'));

    let mut out = String::with_capacity(trimmed.len());
    let mut capitalize = true;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            if capitalize {
                out.push(ch.to_ascii_uppercase());
                capitalize = false;
            } else {
                out.push(ch);
            }
        } else {
            capitalize = true;
        }
    }
    out
}
