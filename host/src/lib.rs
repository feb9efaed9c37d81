pub mod config;
pub mod file_reader;
pub mod mint;
pub mod wallet;

pub use config::MintConfig;
pub use file_reader::{file_to_calldata, file_to_data_uri};
pub use mint::{MintError, MintReceipt, Minter};
pub use wallet::{JsonRpcWallet, TransactionRequest, WalletError, WalletProvider};
