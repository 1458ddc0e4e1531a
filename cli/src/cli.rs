//! # CLI Interface
//!
//! Defines the command-line argument structure for `idena-tx` using
//! `clap` derive. Subcommands: `address`, `sign`, `encode`, `decode` and
//! `version`.

use clap::{Args, Parser, Subcommand};

use idena_tx::encoding::parse_uint_literal;
use idena_tx::transaction::{Transaction, TransactionBuilder};
use idena_tx::CodecError;

/// Offline signer and decoder for Idena transactions.
#[derive(Parser, Debug)]
#[command(
    name = "idena-tx",
    about = "Offline signer and decoder for Idena transactions",
    version,
    propagate_version = true
)]
pub struct IdenaTxCli {
    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "IDENA_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format: `pretty` or `json`.
    #[arg(long, global = true, env = "IDENA_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the address controlled by a private key.
    Address(AddressArgs),
    /// Build and sign a transaction, printing the wire hex.
    Sign(SignArgs),
    /// Build an unsigned transaction, printing the wire hex.
    Encode(TxFieldArgs),
    /// Decode wire hex into readable fields.
    Decode(DecodeArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `address` subcommand.
#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Hex-encoded secp256k1 private key.
    #[arg(long, short = 'k', env = "IDENA_PRIVATE_KEY", hide_env_values = true)]
    pub key: String,
}

/// Arguments for the `sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Hex-encoded secp256k1 private key.
    #[arg(long, short = 'k', env = "IDENA_PRIVATE_KEY", hide_env_values = true)]
    pub key: String,

    #[command(flatten)]
    pub fields: TxFieldArgs,
}

/// Transaction fields shared by `sign` and `encode`.
///
/// Integer amounts accept decimal or `0x` hex.
#[derive(Args, Debug, Default)]
pub struct TxFieldArgs {
    /// Sender nonce.
    #[arg(long, default_value_t = 0)]
    pub nonce: u32,

    /// Epoch.
    #[arg(long, default_value_t = 0)]
    pub epoch: u32,

    /// Transaction type discriminator (0 = SendTx).
    #[arg(long = "type", default_value_t = 0)]
    pub tx_type: u32,

    /// Recipient address, `0x` hex.
    #[arg(long)]
    pub to: Option<String>,

    /// Amount in base units (10^-18 iDNA).
    #[arg(long)]
    pub amount: Option<String>,

    /// Maximum fee in base units.
    #[arg(long)]
    pub max_fee: Option<String>,

    /// Proposer tip in base units.
    #[arg(long)]
    pub tips: Option<String>,

    /// Payload, hex.
    #[arg(long)]
    pub payload: Option<String>,
}

impl TxFieldArgs {
    /// Builds the unsigned transaction these flags describe.
    pub fn to_transaction(&self) -> Result<Transaction, CodecError> {
        let mut builder = TransactionBuilder::default()
            .nonce(self.nonce)
            .epoch(self.epoch)
            .tx_type(self.tx_type)
            .amount(parse_optional_uint(self.amount.as_deref())?)
            .max_fee(parse_optional_uint(self.max_fee.as_deref())?)
            .tips(parse_optional_uint(self.tips.as_deref())?);

        if let Some(to) = &self.to {
            builder = builder.to_hex(to)?;
        }
        if let Some(payload) = &self.payload {
            builder = builder.payload_hex(payload)?;
        }
        Ok(builder.build())
    }
}

fn parse_optional_uint(value: Option<&str>) -> Result<u128, CodecError> {
    value.map(parse_uint_literal).transpose().map(Option::unwrap_or_default)
}

/// Arguments for the `decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wire bytes as hex, with or without `0x`.
    pub hex: String,

    /// Print compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}
