use crate::dex::pump_amm::pda::PammPda;
use crate::dex::pump_amm::state::PoolState;
use crate::error::Result;
use crate::interface::{ProgramIds, TokenProgram, SYSTEM_PROGRAM_ID};
use crate::token::get_associated_token_address;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

pub const BUY_DISCRIMINATOR: [u8; 8] = [102, 6, 61, 18, 1, 218, 235, 234];
pub const SELL_DISCRIMINATOR: [u8; 8] = [51, 230, 133, 164, 1, 127, 131, 173];

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct OptionBool(pub bool);

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BuyArgs {
    pub base_amount_out: u64,
    pub max_quote_amount_in: u64,
    pub track_volume: OptionBool,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SellArgs {
    pub base_amount_in: u64,
    pub min_quote_amount_out: u64,
}

/// buy 和 sell 共用的账户，buy 额外需要 volume accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAccounts {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub global_config: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub user_base_token_account: Pubkey,
    pub user_quote_token_account: Pubkey,
    pub pool_base_token_account: Pubkey,
    pub pool_quote_token_account: Pubkey,
    pub protocol_fee_recipient: Pubkey,
    pub protocol_fee_recipient_token_account: Pubkey,
    pub base_token_program: TokenProgram,
    pub quote_token_program: TokenProgram,
    pub associated_token_program: Pubkey,
    pub event_authority: Pubkey,
    pub program: Pubkey,
    pub coin_creator_vault_ata: Pubkey,
    pub coin_creator_vault_authority: Pubkey,
    pub global_volume_accumulator: Pubkey,
    pub user_volume_accumulator: Pubkey,
    pub fee_config: Pubkey,
    pub fee_program: Pubkey,
}

impl SwapAccounts {
    /// global_config 和 protocol_fee_recipient 不在池子数据里，由配置注入
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        program_ids: &ProgramIds,
        pool_id: Pubkey,
        pool: &PoolState,
        user: Pubkey,
        global_config: Pubkey,
        protocol_fee_recipient: Pubkey,
        base_token_program: TokenProgram,
        quote_token_program: TokenProgram,
    ) -> Self {
        let pda = PammPda::new(program_ids);
        let ata = |wallet: &Pubkey, mint: &Pubkey, token_program: &TokenProgram| {
            get_associated_token_address(wallet, mint, token_program, &program_ids.ata)
        };
        let coin_creator_vault_authority = pda.coin_creator_vault_authority(&pool.coin_creator);
        Self {
            pool: pool_id,
            user,
            global_config,
            base_mint: pool.base_mint,
            quote_mint: pool.quote_mint,
            user_base_token_account: ata(&user, &pool.base_mint, &base_token_program),
            user_quote_token_account: ata(&user, &pool.quote_mint, &quote_token_program),
            pool_base_token_account: pool.pool_base_token_account,
            pool_quote_token_account: pool.pool_quote_token_account,
            protocol_fee_recipient,
            protocol_fee_recipient_token_account: ata(
                &protocol_fee_recipient,
                &pool.quote_mint,
                &quote_token_program,
            ),
            base_token_program,
            quote_token_program,
            associated_token_program: program_ids.ata,
            event_authority: pda.event_authority(),
            program: program_ids.pamm,
            coin_creator_vault_ata: ata(
                &coin_creator_vault_authority,
                &pool.quote_mint,
                &quote_token_program,
            ),
            coin_creator_vault_authority,
            global_volume_accumulator: pda.global_volume_accumulator(),
            user_volume_accumulator: pda.user_volume_accumulator(&user),
            fee_config: pda.fee_config(),
            fee_program: program_ids.fee,
        }
    }

    fn common_metas(&self, capacity: usize) -> Vec<AccountMeta> {
        let mut accounts = Vec::with_capacity(capacity);
        // 1.pool
        accounts.push(AccountMeta::new(self.pool, false));
        // 2.user
        accounts.push(AccountMeta::new(self.user, true));
        // 3.global config
        accounts.push(AccountMeta::new_readonly(self.global_config, false));
        // 4.base mint
        accounts.push(AccountMeta::new_readonly(self.base_mint, false));
        // 5.quote mint
        accounts.push(AccountMeta::new_readonly(self.quote_mint, false));
        // 6.base mint ata
        accounts.push(AccountMeta::new(self.user_base_token_account, false));
        // 7.quote mint ata
        accounts.push(AccountMeta::new(self.user_quote_token_account, false));
        // 8.base mint vault
        accounts.push(AccountMeta::new(self.pool_base_token_account, false));
        // 9.quote mint vault
        accounts.push(AccountMeta::new(self.pool_quote_token_account, false));
        // 10.fee account
        accounts.push(AccountMeta::new_readonly(self.protocol_fee_recipient, false));
        // 11.fee account ata
        accounts.push(AccountMeta::new(
            self.protocol_fee_recipient_token_account,
            false,
        ));
        // 12.base token program
        accounts.push(AccountMeta::new_readonly(
            *self.base_token_program.get_ref_program_id(),
            false,
        ));
        // 13.quote token program
        accounts.push(AccountMeta::new_readonly(
            *self.quote_token_program.get_ref_program_id(),
            false,
        ));
        // 14.system program
        accounts.push(AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false));
        // 15.associated token program
        accounts.push(AccountMeta::new_readonly(
            self.associated_token_program,
            false,
        ));
        // 16.event authority
        accounts.push(AccountMeta::new_readonly(self.event_authority, false));
        // 17.pAMM program
        accounts.push(AccountMeta::new_readonly(self.program, false));
        // 18.coin creator vault ata
        accounts.push(AccountMeta::new(self.coin_creator_vault_ata, false));
        // 19.coin creator vault authority
        accounts.push(AccountMeta::new_readonly(
            self.coin_creator_vault_authority,
            false,
        ));
        accounts
    }

    pub fn buy_metas(&self) -> Vec<AccountMeta> {
        let mut accounts = self.common_metas(23);
        // 20.global volume accumulator
        accounts.push(AccountMeta::new_readonly(
            self.global_volume_accumulator,
            false,
        ));
        // 21.user volume accumulator
        accounts.push(AccountMeta::new(self.user_volume_accumulator, false));
        // 22.fee config
        accounts.push(AccountMeta::new_readonly(self.fee_config, false));
        // 23.fee program
        accounts.push(AccountMeta::new_readonly(self.fee_program, false));
        accounts
    }

    pub fn sell_metas(&self) -> Vec<AccountMeta> {
        let mut accounts = self.common_metas(21);
        // 20.fee config
        accounts.push(AccountMeta::new_readonly(self.fee_config, false));
        // 21.fee program
        accounts.push(AccountMeta::new_readonly(self.fee_program, false));
        accounts
    }
}

/// anchor 指令数据: 8字节discriminator + borsh参数
fn instruction_data<T: BorshSerialize>(discriminator: &[u8; 8], args: &T) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(8 + 17);
    data.extend_from_slice(discriminator);
    data.extend(borsh::to_vec(args)?);
    Ok(data)
}

/// 代理程序的 buy 指令
pub fn buy_instruction(
    proxy_program_id: &Pubkey,
    accounts: &SwapAccounts,
    args: &BuyArgs,
) -> Result<Instruction> {
    Ok(Instruction {
        program_id: *proxy_program_id,
        accounts: accounts.buy_metas(),
        data: instruction_data(&BUY_DISCRIMINATOR, args)?,
    })
}

/// 代理程序的 sell 指令
pub fn sell_instruction(
    proxy_program_id: &Pubkey,
    accounts: &SwapAccounts,
    args: &SellArgs,
) -> Result<Instruction> {
    Ok(Instruction {
        program_id: *proxy_program_id,
        accounts: accounts.sell_metas(),
        data: instruction_data(&SELL_DISCRIMINATOR, args)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::pump_amm::state::test_fixture::sample_pool;
    use crate::interface::{ATA_PROGRAM_ID, PAMM_PROGRAM_ID, PROXY_PROGRAM_ID};
    use spl_associated_token_account::get_associated_token_address_with_program_id;

    fn sample_accounts() -> (PoolState, SwapAccounts) {
        let pool = sample_pool();
        let accounts = SwapAccounts::new(
            &ProgramIds::default(),
            Pubkey::new_unique(),
            &pool,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            TokenProgram::Token2022,
            TokenProgram::Token,
        );
        (pool, accounts)
    }

    #[test]
    fn test_swap_accounts_derivation() {
        let (pool, accounts) = sample_accounts();
        assert_eq!(
            accounts.user_base_token_account,
            get_associated_token_address_with_program_id(
                &accounts.user,
                &pool.base_mint,
                &spl_token_2022::ID
            )
        );
        assert_eq!(
            accounts.user_quote_token_account,
            get_associated_token_address_with_program_id(
                &accounts.user,
                &pool.quote_mint,
                &spl_token::ID
            )
        );
        assert_eq!(
            accounts.protocol_fee_recipient_token_account,
            get_associated_token_address_with_program_id(
                &accounts.protocol_fee_recipient,
                &pool.quote_mint,
                &spl_token::ID
            )
        );
        let pda = PammPda::new(&ProgramIds::default());
        let authority = pda.coin_creator_vault_authority(&pool.coin_creator);
        assert_eq!(accounts.coin_creator_vault_authority, authority);
        assert_eq!(
            accounts.coin_creator_vault_ata,
            get_associated_token_address_with_program_id(&authority, &pool.quote_mint, &spl_token::ID)
        );
        assert_eq!(
            accounts.user_volume_accumulator,
            pda.user_volume_accumulator(&accounts.user)
        );
        assert_eq!(accounts.program, PAMM_PROGRAM_ID);
        assert_eq!(accounts.associated_token_program, ATA_PROGRAM_ID);
    }

    #[test]
    fn test_buy_instruction() {
        let (_, accounts) = sample_accounts();
        let ix = buy_instruction(
            &PROXY_PROGRAM_ID,
            &accounts,
            &BuyArgs {
                base_amount_out: 1_000_000,
                max_quote_amount_in: 5_000_000,
                track_volume: OptionBool(true),
            },
        )
        .unwrap();
        assert_eq!(ix.program_id, PROXY_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 23);
        assert_eq!(&ix.data[..8], &BUY_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &1_000_000_u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &5_000_000_u64.to_le_bytes());
        assert_eq!(&ix.data[24..], &[1]);

        assert_eq!(ix.accounts[0].pubkey, accounts.pool);
        assert!(ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[11].pubkey, spl_token_2022::ID);
        assert_eq!(ix.accounts[12].pubkey, spl_token::ID);
        assert_eq!(ix.accounts[13].pubkey, SYSTEM_PROGRAM_ID);
        assert_eq!(ix.accounts[16].pubkey, PAMM_PROGRAM_ID);
        assert_eq!(ix.accounts[19].pubkey, accounts.global_volume_accumulator);
        assert!(ix.accounts[20].is_writable);
        assert_eq!(ix.accounts[22].pubkey, accounts.fee_program);
        assert_eq!(ix.accounts.iter().filter(|a| a.is_signer).count(), 1);
    }

    #[test]
    fn test_sell_instruction() {
        let (_, accounts) = sample_accounts();
        let ix = sell_instruction(
            &PROXY_PROGRAM_ID,
            &accounts,
            &SellArgs {
                base_amount_in: 500_000,
                min_quote_amount_out: 2_000_000,
            },
        )
        .unwrap();
        assert_eq!(ix.accounts.len(), 21);
        assert_eq!(&ix.data[..8], &SELL_DISCRIMINATOR);
        let args = SellArgs::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(args.base_amount_in, 500_000);
        assert_eq!(args.min_quote_amount_out, 2_000_000);
        assert_eq!(ix.accounts[19].pubkey, accounts.fee_config);
        assert_eq!(ix.accounts[20].pubkey, accounts.fee_program);
        // 前19个账户与buy一致
        let buy = accounts.buy_metas();
        assert_eq!(&ix.accounts[..19], &buy[..19]);
    }
}
