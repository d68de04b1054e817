use crate::error::{Result, SwapperError};
use crate::interface::ProgramIds;
use solana_sdk::pubkey::Pubkey;

pub const DEFAULT_CU_LIMIT: u32 = 500_000;
pub const DEFAULT_PRIORITY_FEE: u64 = 2_000;

/// 运行时配置，由命令行/环境变量注入
#[derive(Debug, Clone)]
pub struct SwapConfig {
    pub program_ids: ProgramIds,
    pub pool: Option<Pubkey>,
    /// 池子数据里没有，只能由配置提供
    pub global_config: Option<Pubkey>,
    pub protocol_fee_recipient: Option<Pubkey>,
    pub cu_limit: u32,
    /// micro lamports
    pub priority_fee: u64,
    pub create_ata: bool,
    pub wrap_sol: bool,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            program_ids: ProgramIds::default(),
            pool: None,
            global_config: None,
            protocol_fee_recipient: None,
            cu_limit: DEFAULT_CU_LIMIT,
            priority_fee: DEFAULT_PRIORITY_FEE,
            create_ata: true,
            wrap_sol: true,
        }
    }
}

impl SwapConfig {
    pub fn pool(&self) -> Result<Pubkey> {
        self.pool.ok_or(SwapperError::ConfigurationMissing("POOL"))
    }

    /// (global_config, protocol_fee_recipient)
    pub fn injected_accounts(&self) -> Result<(Pubkey, Pubkey)> {
        let global_config = self
            .global_config
            .ok_or(SwapperError::ConfigurationMissing("PAMM_GLOBAL_CONFIG"))?;
        let protocol_fee_recipient = self
            .protocol_fee_recipient
            .ok_or(SwapperError::ConfigurationMissing("PAMM_FEE_RECIPIENT"))?;
        Ok((global_config, protocol_fee_recipient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration() {
        let config = SwapConfig::default();
        assert!(matches!(
            config.pool(),
            Err(SwapperError::ConfigurationMissing("POOL"))
        ));
        assert!(matches!(
            config.injected_accounts(),
            Err(SwapperError::ConfigurationMissing("PAMM_GLOBAL_CONFIG"))
        ));
        let config = SwapConfig {
            global_config: Some(Pubkey::new_unique()),
            ..Default::default()
        };
        assert!(matches!(
            config.injected_accounts(),
            Err(SwapperError::ConfigurationMissing("PAMM_FEE_RECIPIENT"))
        ));
    }

    #[test]
    fn test_injected_accounts() {
        let global_config = Pubkey::new_unique();
        let fee_recipient = Pubkey::new_unique();
        let config = SwapConfig {
            global_config: Some(global_config),
            protocol_fee_recipient: Some(fee_recipient),
            ..Default::default()
        };
        assert_eq!(
            config.injected_accounts().unwrap(),
            (global_config, fee_recipient)
        );
        assert_eq!(config.cu_limit, 500_000);
        assert_eq!(config.priority_fee, 2_000);
    }
}
