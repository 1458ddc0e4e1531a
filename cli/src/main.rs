// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # idena-tx
//!
//! Entry point for the `idena-tx` binary. Parses CLI arguments, initializes
//! logging, and runs one codec operation. Results go to stdout, logs to
//! stderr.
//!
//! - `address` — derive the address of a private key
//! - `sign`    — build, sign and encode a transaction
//! - `encode`  — build and encode an unsigned transaction
//! - `decode`  — decode wire hex and recover the sender
//! - `version` — print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use idena_tx::crypto::{derive_address, PrivateKey};
use idena_tx::transaction::Transaction;

use cli::{Commands, IdenaTxCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = IdenaTxCli::parse();
    logging::init_logging(&cli.log_level, LogFormat::from_str_lossy(&cli.log_format));

    match cli.command {
        Commands::Address(args) => print_address(args),
        Commands::Sign(args) => sign(args),
        Commands::Encode(fields) => encode(fields),
        Commands::Decode(args) => decode(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn load_key(hex_key: &str) -> Result<PrivateKey> {
    PrivateKey::from_hex(hex_key).context("private key is not a valid secp256k1 secret")
}

fn print_address(args: cli::AddressArgs) -> Result<()> {
    let key = load_key(&args.key)?;
    println!("{}", derive_address(&key));
    Ok(())
}

fn sign(args: cli::SignArgs) -> Result<()> {
    let key = load_key(&args.key)?;
    let mut tx = args
        .fields
        .to_transaction()
        .context("invalid transaction fields")?;

    tx.sign(&key);
    tracing::info!(
        sender = %derive_address(&key),
        nonce = tx.nonce,
        epoch = tx.epoch,
        "transaction signed"
    );
    println!("{}", tx.encode_hex());
    Ok(())
}

fn encode(fields: cli::TxFieldArgs) -> Result<()> {
    let tx = fields
        .to_transaction()
        .context("invalid transaction fields")?;
    println!("{}", tx.encode_hex());
    Ok(())
}

fn decode(args: cli::DecodeArgs) -> Result<()> {
    let tx = Transaction::decode_hex(&args.hex).context("failed to decode transaction")?;

    if args.compact {
        println!("{}", tx.to_display());
    } else {
        println!("{:#}", tx.to_display());
    }

    if tx.is_signed() {
        match tx.sender() {
            Ok(sender) => println!("sender: {sender}"),
            Err(err) => tracing::warn!(error = %err, "could not recover sender"),
        }
    }
    Ok(())
}

fn print_version() {
    println!("idena-tx {}", env!("CARGO_PKG_VERSION"));
    println!("  curve:   {}", idena_tx::config::SIGNING_CURVE);
    println!("  hash:    {}", idena_tx::config::HASH_FUNCTION);
}
