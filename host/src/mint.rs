use std::path::Path;

use bitbrains_calldata_core::{encode_utf8_to_hex, CalldataError, HexCalldata, Payload};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::MintConfig;
use crate::file_reader::file_to_data_uri;
use crate::wallet::{TransactionRequest, WalletError, WalletProvider};

#[derive(Debug, Error)]
pub enum MintError {
    #[error("Minting is coming soon")]
    Disabled,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Calldata(#[from] CalldataError),
}

/// What a successful mint hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash: String,
    pub from: String,
    pub calldata_bytes: usize,
}

/// Runs one mint action per call against a wallet capability.
pub struct Minter<W> {
    config: MintConfig,
    wallet: W,
}

impl<W: WalletProvider> Minter<W> {
    pub fn new(config: MintConfig, wallet: W) -> Self {
        Minter { config, wallet }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Inscribes a text message with optional anchors.
    ///
    /// The encoded message document is checked against the ceiling.
    pub async fn mint_message(
        &self,
        message: &str,
        anchors: Vec<String>,
    ) -> Result<MintReceipt, MintError> {
        self.ensure_enabled()?;
        let payload = Payload::message(message, anchors, now_millis());
        let text = payload.to_data_uri()?.to_string();
        self.config
            .max_calldata_bytes
            .check(text.len() as u64)
            .into_result()?;
        self.submit(encode_utf8_to_hex(&text)).await
    }

    /// Inscribes an image file.
    ///
    /// The ceiling applies to the file itself and is checked before it is
    /// read. A file that passes proceeds to encoding unconditionally.
    pub async fn mint_image(&self, path: &Path) -> Result<MintReceipt, MintError> {
        self.ensure_enabled()?;
        let image = file_to_data_uri(path, self.config.max_calldata_bytes).await?;
        let payload = Payload::image(&image, self.config.inscription_site.as_str(), now_millis());
        self.submit(payload.to_calldata()?).await
    }

    fn ensure_enabled(&self) -> Result<(), MintError> {
        if self.config.minting_enabled {
            Ok(())
        } else {
            warn!("Mint requested while minting is disabled");
            Err(MintError::Disabled)
        }
    }

    async fn submit(&self, calldata: HexCalldata) -> Result<MintReceipt, MintError> {
        let accounts = self.wallet.request_accounts().await?;
        let from = accounts.into_iter().next().ok_or(MintError::NoAccounts)?;
        let to = self.config.recipient.clone().unwrap_or_else(|| from.clone());
        let calldata_bytes = calldata.byte_len();

        info!(
            "Submitting inscription from {} to {} ({} calldata bytes)",
            from, to, calldata_bytes
        );
        let tx = TransactionRequest::new(from.clone(), to, self.config.value_wei, calldata);
        let tx_hash = self.wallet.send_transaction(tx).await?;
        info!("Inscription submitted: {}", tx_hash);

        Ok(MintReceipt {
            tx_hash,
            from,
            calldata_bytes,
        })
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
