//! Sealbox Command Line Tool
//!
//! Provides commands for working with Sealbox records:
//! - canonicalize: Print the canonical form of a JSON file
//! - encode: Depth-1 encode a record
//! - decode: Invert an encoded record
//! - sign: Compute the HMAC-SHA256 signature of a record
//! - verify: Check a signature against a record
//!
//! The signing key comes from `SEALBOX_SECRET_KEY` unless `--key` is given.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sealbox_canonical::canonicalize_value;
use sealbox_codec::{decode, encode};
use sealbox_signing::{sign, verify, Secret};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sealbox")]
#[command(version)]
#[command(about = "Sealbox Command Line Tool - Canonicalize, encode, and sign JSON records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print canonical JSON
    #[command(about = "Output the canonical form of a JSON file")]
    Canonicalize {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Encode a record
    #[command(about = "Replace each top-level value with a base64 token")]
    Encode {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Decode an encoded record
    #[command(about = "Invert base64 tokens with best-effort type recovery")]
    Decode {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Sign a record
    #[command(about = "Compute the keyed signature of a record's canonical form")]
    Sign {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Signing key (defaults to SEALBOX_SECRET_KEY)
        #[arg(long, short)]
        key: Option<String>,
    },

    /// Verify a record's signature
    #[command(about = "Check a signature against a record")]
    Verify {
        /// Path to the JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The hex signature to check
        #[arg(value_name = "SIGNATURE")]
        signature: String,

        /// Signing key (defaults to SEALBOX_SECRET_KEY)
        #[arg(long, short)]
        key: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Canonicalize { file } => handle_canonicalize(&file),
        Commands::Encode { file } => handle_encode(&file),
        Commands::Decode { file } => handle_decode(&file),
        Commands::Sign { file, key } => handle_sign(&file, key),
        Commands::Verify {
            file,
            signature,
            key,
        } => handle_verify(&file, &signature, key),
    }
}

fn read_value(file: &PathBuf) -> Result<serde_json::Value> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {} as JSON", file.display()))
}

fn resolve_secret(key: Option<String>) -> Secret {
    match key {
        Some(key) => Secret::new(key),
        None => Secret::from_env(),
    }
}

fn handle_canonicalize(file: &PathBuf) -> Result<()> {
    let value = read_value(file)?;
    let canonical =
        canonicalize_value(&value).with_context(|| "Failed to produce canonical form")?;
    println!("{}", canonical);
    Ok(())
}

fn handle_encode(file: &PathBuf) -> Result<()> {
    let value = read_value(file)?;
    let encoded = encode(&value).with_context(|| "Failed to encode record")?;
    println!("{}", serde_json::to_string_pretty(&encoded)?);
    Ok(())
}

fn handle_decode(file: &PathBuf) -> Result<()> {
    let value = read_value(file)?;
    let decoded = decode(&value).with_context(|| "Failed to decode record")?;
    println!("{}", serde_json::to_string_pretty(&decoded)?);
    Ok(())
}

fn handle_sign(file: &PathBuf, key: Option<String>) -> Result<()> {
    let value = read_value(file)?;
    let signature =
        sign(&value, &resolve_secret(key)).with_context(|| "Failed to sign record")?;
    println!("{}", signature);
    Ok(())
}

fn handle_verify(file: &PathBuf, signature: &str, key: Option<String>) -> Result<()> {
    let value = read_value(file)?;
    let is_valid = verify(&value, signature, &resolve_secret(key))
        .with_context(|| "Failed to verify record")?;

    if is_valid {
        println!("Signature is valid");
        Ok(())
    } else {
        bail!("Signature is NOT valid");
    }
}
