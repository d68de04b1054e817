use solana_rpc_client_api::client_error::Error as ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwapperError>;

#[derive(Debug, Error)]
pub enum SwapperError {
    #[error("账户不存在: {0}")]
    NotFound(Pubkey),
    #[error("账户 {account} owner不匹配, expected {expected}, got {actual}")]
    OwnerMismatch {
        account: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },
    #[error("账户 {0} 的discriminator不匹配")]
    DiscriminatorMismatch(Pubkey),
    #[error("缺少配置项: {0}")]
    ConfigurationMissing(&'static str),
    #[error("无法识别mint {mint} 的Token Program: {owner}")]
    UnknownAssetOwner { mint: Pubkey, owner: Pubkey },
    #[error("账户 {account} 数据长度不足, 需要 {expected} 字节, 实际 {actual} 字节")]
    AccountDataTooShort {
        account: Pubkey,
        expected: usize,
        actual: usize,
    },
    #[error("Token指令构造失败: {0}")]
    TokenInstruction(String),
    #[error("加载钱包失败: {0}")]
    Keypair(String),
    #[error("交易模拟失败: {0}")]
    SimulationFailed(String),
    #[error(transparent)]
    Rpc(#[from] ClientError),
    #[error(transparent)]
    Serialization(#[from] std::io::Error),
}
