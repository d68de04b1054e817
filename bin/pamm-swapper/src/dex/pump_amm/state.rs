use crate::dex::byte_utils::LayoutReader;
use crate::error::{Result, SwapperError};
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

pub const POOL_DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];
/// discriminator + pool_bump + index + 6 * pubkey + lp_supply + coin_creator
pub const POOL_ACCOUNT_LEN: usize = 8 + 1 + 2 + 32 * 6 + 8 + 32;

/// 字段顺序不要动，与链上布局一致
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolState {
    pub pool_bump: u8,
    pub index: u16,
    #[serde_as(as = "DisplayFromStr")]
    pub creator: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub base_mint: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub quote_mint: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub lp_mint: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub pool_base_token_account: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub pool_quote_token_account: Pubkey,
    pub lp_supply: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub coin_creator: Pubkey,
}

impl PoolState {
    /// 校验discriminator后按字段顺序解析，多余的尾部数据忽略
    pub fn try_deserialize(pool_id: &Pubkey, data: &[u8]) -> Result<Self> {
        if data.len() < POOL_DISCRIMINATOR.len() || data[..8] != POOL_DISCRIMINATOR {
            return Err(SwapperError::DiscriminatorMismatch(*pool_id));
        }
        let mut reader = LayoutReader::new(*pool_id, &data[8..]);
        Ok(Self {
            pool_bump: reader.read_u8()?,
            index: reader.read_u16()?,
            creator: reader.read_pubkey()?,
            base_mint: reader.read_pubkey()?,
            quote_mint: reader.read_pubkey()?,
            lp_mint: reader.read_pubkey()?,
            pool_base_token_account: reader.read_pubkey()?,
            pool_quote_token_account: reader.read_pubkey()?,
            lp_supply: reader.read_u64()?,
            coin_creator: reader.read_pubkey()?,
        })
    }

    /// 先校验owner，再校验discriminator
    pub fn try_from_account(
        pool_id: &Pubkey,
        account: &Account,
        expected_owner: &Pubkey,
    ) -> Result<Self> {
        if &account.owner != expected_owner {
            return Err(SwapperError::OwnerMismatch {
                account: *pool_id,
                expected: *expected_owner,
                actual: account.owner,
            });
        }
        Self::try_deserialize(pool_id, account.data.as_slice())
    }
}

/// 读取一次池子账户(confirmed)，不缓存，不重试
pub async fn fetch_pool(
    rpc_client: &RpcClient,
    pool_id: &Pubkey,
    expected_owner: &Pubkey,
) -> Result<PoolState> {
    let account = rpc_client
        .get_account_with_commitment(pool_id, CommitmentConfig::confirmed())
        .await?
        .value
        .ok_or(SwapperError::NotFound(*pool_id))?;
    let pool = PoolState::try_from_account(pool_id, &account, expected_owner)?;
    debug!("【Pool】key : {:?}\ndata : {:#?}", pool_id, pool);
    Ok(pool)
}

#[cfg(test)]
pub(crate) mod test_fixture {
    use super::*;

    /// 按链上布局编码一个Pool账户数据
    pub(crate) fn encode_pool(pool: &PoolState) -> Vec<u8> {
        let mut data = Vec::with_capacity(POOL_ACCOUNT_LEN);
        data.extend(POOL_DISCRIMINATOR);
        data.push(pool.pool_bump);
        data.extend(pool.index.to_le_bytes());
        data.extend(pool.creator.to_bytes());
        data.extend(pool.base_mint.to_bytes());
        data.extend(pool.quote_mint.to_bytes());
        data.extend(pool.lp_mint.to_bytes());
        data.extend(pool.pool_base_token_account.to_bytes());
        data.extend(pool.pool_quote_token_account.to_bytes());
        data.extend(pool.lp_supply.to_le_bytes());
        data.extend(pool.coin_creator.to_bytes());
        data
    }

    pub(crate) fn sample_pool() -> PoolState {
        PoolState {
            pool_bump: 254,
            index: 0,
            creator: Pubkey::new_unique(),
            base_mint: Pubkey::new_unique(),
            quote_mint: spl_token::native_mint::ID,
            lp_mint: Pubkey::new_unique(),
            pool_base_token_account: Pubkey::new_unique(),
            pool_quote_token_account: Pubkey::new_unique(),
            lp_supply: 4_193_388_012_158,
            coin_creator: Pubkey::new_unique(),
        }
    }
}
