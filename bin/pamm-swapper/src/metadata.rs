use crate::error::{Result, SwapperError};
use solana_sdk::signature::{read_keypair_file, Keypair};
use solana_sdk::signer::Signer;
use std::path::PathBuf;
use tracing::info;

/// 展开 `~/` 前缀
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}

pub fn get_keypair(keypair_path: &str) -> Result<Keypair> {
    let path = expand_home(keypair_path);
    let keypair = read_keypair_file(&path)
        .map_err(|e| SwapperError::Keypair(format!("{}: {}", path.display(), e)))?;
    info!("钱包地址 : {}", keypair.pubkey());
    Ok(keypair)
}
