use std::path::PathBuf;

use anyhow::{Context, Result};
use bitbrains_calldata_core::{
    check_size_limit, decode_hex_calldata, encode_utf8_to_hex, ByteCeiling,
};
use bitbrains_host::{file_to_calldata, JsonRpcWallet, MintConfig, Minter};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Bit Brains inscription calldata tool", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Overrides MAX_CALLDATA_BYTES for this run
    #[clap(long, global = true)]
    max_bytes: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Prints the hex calldata for a text payload.
    EncodeText { text: String },
    /// Prints the hex calldata for a file wrapped as a data URI.
    EncodeFile { path: PathBuf },
    /// Checks a byte length against the ceiling.
    CheckSize { byte_length: u64 },
    /// Decodes hex calldata back to text (or hex bytes if not UTF-8).
    Decode { calldata: String },
    /// Inscribes a text message through the configured wallet.
    MintMessage {
        message: String,
        /// Anchor references carried alongside the message
        #[clap(long = "anchor")]
        anchors: Vec<String>,
    },
    /// Inscribes an image file through the configured wallet.
    MintImage { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let max_bytes = cli.max_bytes;

    match cli.command {
        Commands::EncodeText { text } => {
            println!("{}", encode_utf8_to_hex(&text));
        }
        Commands::EncodeFile { path } => {
            let ceiling = resolve_ceiling(max_bytes)?;
            let calldata = file_to_calldata(&path, ceiling)
                .await
                .with_context(|| format!("Failed to encode {}", path.display()))?;
            println!("{calldata}");
        }
        Commands::CheckSize { byte_length } => {
            let ceiling = resolve_ceiling(max_bytes)?;
            let check = check_size_limit(byte_length, ceiling.bytes());
            println!(
                "{} ({} of {} bytes)",
                if check.ok { "ok" } else { "too large" },
                check.byte_length,
                check.ceiling
            );
        }
        Commands::Decode { calldata } => {
            let bytes = decode_hex_calldata(&calldata).context("Failed to decode calldata")?;
            match String::from_utf8(bytes) {
                Ok(text) => println!("{text}"),
                Err(e) => println!("{}", hex::encode(e.into_bytes())),
            }
        }
        Commands::MintMessage { message, anchors } => {
            let minter = connect_minter(max_bytes)?;
            let receipt = minter.mint_message(&message, anchors).await?;
            println!("{}", receipt.tx_hash);
        }
        Commands::MintImage { path } => {
            let minter = connect_minter(max_bytes)?;
            let receipt = minter.mint_image(&path).await?;
            println!("{}", receipt.tx_hash);
        }
    }

    Ok(())
}

// Only the ceiling is read here so the local commands ignore wallet settings.
fn resolve_ceiling(max_bytes: Option<u64>) -> Result<ByteCeiling> {
    match max_bytes {
        Some(bytes) => Ok(ByteCeiling::new(bytes)),
        None => MintConfig::load_ceiling().context("Failed to load MAX_CALLDATA_BYTES"),
    }
}

fn connect_minter(max_bytes: Option<u64>) -> Result<Minter<JsonRpcWallet>> {
    let mut config = MintConfig::load().context("Failed to load configuration")?;
    if let Some(bytes) = max_bytes {
        config.max_calldata_bytes = ByteCeiling::new(bytes);
    }
    info!("Config loaded: {:?}", config);

    let wallet = JsonRpcWallet::connect(&config.wallet_rpc_url)
        .context("Failed to create wallet client")?;
    Ok(Minter::new(config, wallet))
}
