use bitbrains_calldata_core::HexCalldata;
use jsonrpsee::core::async_trait;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::proc_macros::rpc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Failed to connect to wallet at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Wallet request {method} failed: {reason}")]
    Request { method: &'static str, reason: String },
}

/// Parameters of an `eth_sendTransaction` request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Hex quantity, e.g. `0x0`
    pub value: String,
    pub data: HexCalldata,
}

impl TransactionRequest {
    pub fn new(from: String, to: String, value_wei: u128, data: HexCalldata) -> Self {
        TransactionRequest {
            from,
            to,
            value: to_quantity(value_wei),
            data,
        }
    }
}

/// Ethereum JSON-RPC quantity encoding: minimal hex digits, `0x0` for zero.
pub fn to_quantity(value: u128) -> String {
    format!("0x{value:x}")
}

/// The capability the mint flow needs from a wallet.
///
/// Signing and broadcast both happen behind this trait.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Submits the transaction and returns its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<String, WalletError>;
}

#[rpc(client, namespace = "eth")]
pub trait EthWalletRpc {
    #[method(name = "requestAccounts")]
    async fn request_accounts(&self) -> jsonrpsee::core::RpcResult<Vec<String>>;

    #[method(name = "sendTransaction")]
    async fn send_transaction(&self, tx: TransactionRequest) -> jsonrpsee::core::RpcResult<String>;
}

/// Wallet reached over HTTP JSON-RPC, e.g. a local signer or dev node.
pub struct JsonRpcWallet {
    url: String,
    client: HttpClient,
}

impl JsonRpcWallet {
    pub fn connect(url: &str) -> Result<Self, WalletError> {
        let client = HttpClientBuilder::default()
            .build(url)
            .map_err(|e| WalletError::Connect {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        info!("Wallet JSON-RPC client created for {}", url);
        Ok(JsonRpcWallet {
            url: url.to_string(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        debug!("RPC: eth_requestAccounts -> {}", self.url);
        EthWalletRpcClient::request_accounts(&self.client)
            .await
            .map_err(|e| WalletError::Request {
                method: "eth_requestAccounts",
                reason: e.to_string(),
            })
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<String, WalletError> {
        debug!(
            "RPC: eth_sendTransaction from {} to {} with {} calldata bytes",
            tx.from,
            tx.to,
            tx.data.byte_len()
        );
        EthWalletRpcClient::send_transaction(&self.client, tx)
            .await
            .map_err(|e| WalletError::Request {
                method: "eth_sendTransaction",
                reason: e.to_string(),
            })
    }
}
