use crate::interface::ProgramIds;
use solana_sdk::pubkey::Pubkey;

pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const GLOBAL_VOLUME_ACCUMULATOR_SEED: &[u8] = b"global_volume_accumulator";
pub const USER_VOLUME_ACCUMULATOR_SEED: &[u8] = b"user_volume_accumulator";
pub const CREATOR_VAULT_SEED: &[u8] = b"creator_vault";
pub const FEE_CONFIG_SEED: &[u8] = b"fee_config";

/// fee_config 的第二个seed，固定32字节
pub const FEE_CONFIG_CONST_SEED: [u8; 32] = [
    12, 20, 222, 252, 130, 94, 198, 118, 148, 37, 8, 24, 187, 101, 64, 101, 244, 41, 141, 49, 86,
    213, 113, 180, 212, 248, 9, 12, 24, 233, 168, 99,
];

/// pAMM 以及 fee program 的PDA推导，每次调用都重新计算，不缓存
#[derive(Debug, Clone, Copy)]
pub struct PammPda {
    pamm_program_id: Pubkey,
    fee_program_id: Pubkey,
}

impl PammPda {
    pub fn new(program_ids: &ProgramIds) -> Self {
        Self {
            pamm_program_id: program_ids.pamm,
            fee_program_id: program_ids.fee,
        }
    }

    pub fn find_event_authority(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], &self.pamm_program_id)
    }

    /// 仅用于核对配置里的 global config，swap 账户列表只使用配置注入的值
    pub fn find_global_config(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], &self.pamm_program_id)
    }

    pub fn find_global_volume_accumulator(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[GLOBAL_VOLUME_ACCUMULATOR_SEED], &self.pamm_program_id)
    }

    pub fn find_user_volume_accumulator(&self, user: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[USER_VOLUME_ACCUMULATOR_SEED, user.as_ref()],
            &self.pamm_program_id,
        )
    }

    pub fn find_coin_creator_vault_authority(&self, coin_creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[CREATOR_VAULT_SEED, coin_creator.as_ref()],
            &self.pamm_program_id,
        )
    }

    pub fn find_fee_config(&self) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[FEE_CONFIG_SEED, FEE_CONFIG_CONST_SEED.as_ref()],
            &self.fee_program_id,
        )
    }

    pub fn event_authority(&self) -> Pubkey {
        self.find_event_authority().0
    }

    /// 见 [`PammPda::find_global_config`]
    pub fn global_config(&self) -> Pubkey {
        self.find_global_config().0
    }

    pub fn global_volume_accumulator(&self) -> Pubkey {
        self.find_global_volume_accumulator().0
    }

    pub fn user_volume_accumulator(&self, user: &Pubkey) -> Pubkey {
        self.find_user_volume_accumulator(user).0
    }

    pub fn coin_creator_vault_authority(&self, coin_creator: &Pubkey) -> Pubkey {
        self.find_coin_creator_vault_authority(coin_creator).0
    }

    pub fn fee_config(&self) -> Pubkey {
        self.find_fee_config().0
    }
}
