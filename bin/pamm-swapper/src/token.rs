use crate::error::{Result, SwapperError};
use crate::interface::{get_token_program_with_owner, TokenProgram};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

/// 根据mint账户的owner判断Token Program
pub fn token_program_of_mint(mint: &Pubkey, account: Option<&Account>) -> Result<TokenProgram> {
    let account = account.ok_or(SwapperError::NotFound(*mint))?;
    get_token_program_with_owner(&account.owner).ok_or(SwapperError::UnknownAssetOwner {
        mint: *mint,
        owner: account.owner,
    })
}

/// 一次getMultipleAccounts读取所有mint(confirmed)，按入参顺序返回
pub async fn resolve_token_programs(
    rpc_client: &RpcClient,
    mints: &[Pubkey],
) -> Result<Vec<TokenProgram>> {
    let accounts = rpc_client
        .get_multiple_accounts_with_commitment(mints, CommitmentConfig::confirmed())
        .await?
        .value;
    let token_programs = mints
        .iter()
        .enumerate()
        .map(|(i, mint)| token_program_of_mint(mint, accounts.get(i).and_then(|a| a.as_ref())))
        .collect::<Result<Vec<_>>>()?;
    debug!("mint : {:?}, token program : {:?}", mints, token_programs);
    Ok(token_programs)
}

/// ATA推导，使用配置的ATA program
pub fn get_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &TokenProgram,
    ata_program_id: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            wallet.as_ref(),
            token_program.get_ref_program_id().as_ref(),
            mint.as_ref(),
        ],
        ata_program_id,
    )
    .0
}
