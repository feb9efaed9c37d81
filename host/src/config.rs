use std::env;

use anyhow::{anyhow, Context, Result};
use bitbrains_calldata_core::{constants::DEFAULT_BYTE_CEILING, ByteCeiling};
use dotenv::dotenv;

const DEFAULT_WALLET_RPC_URL: &str = "http://127.0.0.1:8545";
const DEFAULT_INSCRIPTION_SITE: &str = "bitbrains.xyz";

#[derive(Clone, Debug)]
pub struct MintConfig {
    pub wallet_rpc_url: String,
    pub max_calldata_bytes: ByteCeiling,
    /// Feature flag for the mint actions; when off they report "coming soon".
    pub minting_enabled: bool,
    pub inscription_site: String,
    /// Destination of the inscription transaction. `None` sends to self.
    pub recipient: Option<String>,
    pub value_wei: u128,
}

impl Default for MintConfig {
    fn default() -> Self {
        MintConfig {
            wallet_rpc_url: DEFAULT_WALLET_RPC_URL.to_string(),
            max_calldata_bytes: ByteCeiling::default(),
            minting_enabled: false,
            inscription_site: DEFAULT_INSCRIPTION_SITE.to_string(),
            recipient: None,
            value_wei: 0,
        }
    }
}

impl MintConfig {
    /// Loads from the process environment, picking up a `.env` file if present.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads only the byte ceiling, for flows that never touch the wallet.
    pub fn load_ceiling() -> Result<ByteCeiling> {
        dotenv().ok();
        ceiling_from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let recipient = match lookup("MINT_RECIPIENT") {
            Some(addr) if !addr.trim().is_empty() => Some(parse_address(addr.trim())?),
            _ => None,
        };

        Ok(MintConfig {
            wallet_rpc_url: lookup("WALLET_RPC_URL")
                .unwrap_or_else(|| DEFAULT_WALLET_RPC_URL.to_string()),
            max_calldata_bytes: ceiling_from_lookup(&lookup)?,
            minting_enabled: parse_bool(
                "MINTING_ENABLED",
                &lookup("MINTING_ENABLED").unwrap_or_else(|| "false".to_string()),
            )?,
            inscription_site: lookup("INSCRIPTION_SITE")
                .unwrap_or_else(|| DEFAULT_INSCRIPTION_SITE.to_string()),
            recipient,
            value_wei: lookup("MINT_VALUE_WEI")
                .unwrap_or_else(|| "0".to_string())
                .parse()
                .context("MINT_VALUE_WEI must be a non-negative integer")?,
        })
    }
}

pub fn ceiling_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<ByteCeiling> {
    Ok(ByteCeiling::new(
        lookup("MAX_CALLDATA_BYTES")
            .unwrap_or_else(|| DEFAULT_BYTE_CEILING.to_string())
            .parse()
            .context("MAX_CALLDATA_BYTES must be a non-negative integer")?,
    ))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("{key} must be a boolean, got {other:?}")),
    }
}

/// Validates a `0x`-prefixed 20-byte address and normalises it to lowercase.
pub fn parse_address(raw: &str) -> Result<String> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| anyhow!("Address {raw:?} is missing the 0x prefix"))?;
    let bytes = hex::decode(digits).with_context(|| format!("Address {raw:?} is not valid hex"))?;
    if bytes.len() != 20 {
        return Err(anyhow!(
            "Address {raw:?} must be 20 bytes, got {}",
            bytes.len()
        ));
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = MintConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.wallet_rpc_url, DEFAULT_WALLET_RPC_URL);
        assert_eq!(config.max_calldata_bytes.bytes(), 131072);
        assert!(!config.minting_enabled);
        assert_eq!(config.recipient, None);
        assert_eq!(config.value_wei, 0);
    }

    #[test]
    fn test_overrides() {
        let config = MintConfig::from_lookup(lookup_from(&[
            ("MAX_CALLDATA_BYTES", "1024"),
            ("MINTING_ENABLED", "TRUE"),
            ("MINT_RECIPIENT", "0xABCDEFabcdef0123456789abcdef0123456789ab"),
            ("MINT_VALUE_WEI", "1000"),
        ]))
        .unwrap();
        assert_eq!(config.max_calldata_bytes.bytes(), 1024);
        assert!(config.minting_enabled);
        assert_eq!(
            config.recipient.as_deref(),
            Some("0xabcdefabcdef0123456789abcdef0123456789ab")
        );
        assert_eq!(config.value_wei, 1000);
    }

    #[test]
    fn test_ceiling_ignores_unrelated_keys() {
        let lookup = lookup_from(&[
            ("MAX_CALLDATA_BYTES", "2048"),
            ("MINT_RECIPIENT", "not-an-address"),
            ("MINTING_ENABLED", "maybe"),
        ]);
        assert_eq!(ceiling_from_lookup(&lookup).unwrap().bytes(), 2048);
        assert!(MintConfig::from_lookup(&lookup).is_err());
        assert_eq!(ceiling_from_lookup(lookup_from(&[])).unwrap().bytes(), 131072);
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(MintConfig::from_lookup(lookup_from(&[("MAX_CALLDATA_BYTES", "-1")])).is_err());
        assert!(MintConfig::from_lookup(lookup_from(&[("MINTING_ENABLED", "maybe")])).is_err());
        assert!(MintConfig::from_lookup(lookup_from(&[("MINT_RECIPIENT", "0x1234")])).is_err());
    }
}
