use crate::config::SwapConfig;
use crate::dex::pump_amm::{
    buy_instruction, fetch_pool, sell_instruction, BuyArgs, OptionBool, PoolState, SellArgs,
    SwapAccounts,
};
use crate::error::{Result, SwapperError};
use crate::executor::Executor;
use crate::interface::{TokenProgram, SYSTEM_PROGRAM_ID};
use crate::token::resolve_token_programs;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;
use tracing::{info, warn};

/// 每次调用显式传入的上下文，不使用全局单例
pub struct SwapContext {
    rpc_client: Arc<RpcClient>,
    payer: Arc<Keypair>,
    config: SwapConfig,
    executor: Arc<dyn Executor>,
}

impl SwapContext {
    pub fn new(
        rpc_client: Arc<RpcClient>,
        payer: Arc<Keypair>,
        config: SwapConfig,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            rpc_client,
            payer,
            config,
            executor,
        }
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// 读取池子 + mint 的 Token Program，组装出 swap 需要的全部账户
    pub async fn load_swap_accounts(&self, pool_id: &Pubkey) -> Result<(PoolState, SwapAccounts)> {
        let (global_config, protocol_fee_recipient) = self.config.injected_accounts()?;
        let program_ids = &self.config.program_ids;
        let pool = fetch_pool(&self.rpc_client, pool_id, &program_ids.pamm).await?;
        let token_programs =
            resolve_token_programs(&self.rpc_client, &[pool.base_mint, pool.quote_mint]).await?;
        // 与入参一一对应
        let (base_token_program, quote_token_program) = (token_programs[0], token_programs[1]);
        let accounts = SwapAccounts::new(
            program_ids,
            *pool_id,
            &pool,
            self.payer.pubkey(),
            global_config,
            protocol_fee_recipient,
            base_token_program,
            quote_token_program,
        );
        Ok((pool, accounts))
    }

    pub async fn build_buy_instructions(
        &self,
        pool_id: &Pubkey,
        base_amount_out: u64,
        max_quote_amount_in: u64,
        track_volume: bool,
    ) -> Result<Vec<Instruction>> {
        let (_, accounts) = self.load_swap_accounts(pool_id).await?;
        let mut instructions = Vec::with_capacity(7);
        with_priority_fee(
            &mut instructions,
            self.config.cu_limit,
            self.config.priority_fee,
        );
        if self.config.create_ata {
            instructions.extend(create_user_atas(
                &self.payer.pubkey(),
                &accounts,
                &self.config.program_ids.ata,
            ));
        }
        if self.config.wrap_sol && accounts.quote_mint == spl_token::native_mint::ID {
            // 不创建ATA时无法保证wSOL账户存在
            if self.config.create_ata {
                instructions.extend(wrap_sol_instructions(
                    &self.payer.pubkey(),
                    &accounts.user_quote_token_account,
                    max_quote_amount_in,
                )?);
            } else {
                warn!(
                    "未开启ATA创建, 跳过wSOL包装, wSOL ATA : {}",
                    accounts.user_quote_token_account
                );
            }
        }
        instructions.push(buy_instruction(
            &self.config.program_ids.proxy,
            &accounts,
            &BuyArgs {
                base_amount_out,
                max_quote_amount_in,
                track_volume: OptionBool(track_volume),
            },
        )?);
        Ok(instructions)
    }

    pub async fn build_sell_instructions(
        &self,
        pool_id: &Pubkey,
        base_amount_in: u64,
        min_quote_amount_out: u64,
    ) -> Result<Vec<Instruction>> {
        let (_, accounts) = self.load_swap_accounts(pool_id).await?;
        let mut instructions = Vec::with_capacity(5);
        with_priority_fee(
            &mut instructions,
            self.config.cu_limit,
            self.config.priority_fee,
        );
        if self.config.create_ata {
            instructions.extend(create_user_atas(
                &self.payer.pubkey(),
                &accounts,
                &self.config.program_ids.ata,
            ));
        }
        instructions.push(sell_instruction(
            &self.config.program_ids.proxy,
            &accounts,
            &SellArgs {
                base_amount_in,
                min_quote_amount_out,
            },
        )?);
        Ok(instructions)
    }

    pub async fn buy(
        &self,
        pool_id: &Pubkey,
        base_amount_out: u64,
        max_quote_amount_in: u64,
        track_volume: bool,
    ) -> Result<Signature> {
        info!(
            "【Buy】pool : {}, base_amount_out : {}, max_quote_amount_in : {}, track_volume : {}",
            pool_id, base_amount_out, max_quote_amount_in, track_volume
        );
        let instructions = self
            .build_buy_instructions(pool_id, base_amount_out, max_quote_amount_in, track_volume)
            .await?;
        self.submit(instructions).await
    }

    pub async fn sell(
        &self,
        pool_id: &Pubkey,
        base_amount_in: u64,
        min_quote_amount_out: u64,
    ) -> Result<Signature> {
        info!(
            "【Sell】pool : {}, base_amount_in : {}, min_quote_amount_out : {}",
            pool_id, base_amount_in, min_quote_amount_out
        );
        let instructions = self
            .build_sell_instructions(pool_id, base_amount_in, min_quote_amount_out)
            .await?;
        self.submit(instructions).await
    }

    async fn submit(&self, instructions: Vec<Instruction>) -> Result<Signature> {
        let blockhash = self.rpc_client.get_latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&self.payer.pubkey()),
            &[self.payer.as_ref()],
            blockhash,
        );
        info!(
            "【{}】提交交易, 指令数量 : {}",
            self.executor.name(),
            instructions.len()
        );
        self.executor.execute(&self.rpc_client, transaction).await
    }
}

/// 设置 CU 和优先费
pub fn with_priority_fee(instructions: &mut Vec<Instruction>, cu_limit: u32, micro_lamports: u64) {
    instructions.push(ComputeBudgetInstruction::set_compute_unit_limit(cu_limit));
    instructions.push(ComputeBudgetInstruction::set_compute_unit_price(
        micro_lamports,
    ));
}

/// 用户 base/quote ATA，已存在时不报错
///
/// 地址与 swap 账户列表使用同一个 ATA program 推导
fn create_user_atas(
    payer: &Pubkey,
    accounts: &SwapAccounts,
    ata_program_id: &Pubkey,
) -> Vec<Instruction> {
    [
        (
            accounts.user_base_token_account,
            accounts.base_mint,
            accounts.base_token_program,
        ),
        (
            accounts.user_quote_token_account,
            accounts.quote_mint,
            accounts.quote_token_program,
        ),
    ]
    .iter()
    .map(|(ata, mint, token_program): &(Pubkey, Pubkey, TokenProgram)| {
        create_ata_idempotent(
            ata_program_id,
            payer,
            ata,
            &accounts.user,
            mint,
            token_program.get_ref_program_id(),
        )
    })
    .collect()
}

/// CreateIdempotent, 指令数据为 [1]
fn create_ata_idempotent(
    ata_program_id: &Pubkey,
    payer: &Pubkey,
    ata: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *ata_program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*ata, false),
            AccountMeta::new_readonly(*wallet, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(*token_program_id, false),
        ],
        data: vec![1],
    }
}

/// SOL -> wSOL: 转账到 wSOL ATA 后 sync_native
fn wrap_sol_instructions(
    user: &Pubkey,
    wsol_ata: &Pubkey,
    lamports: u64,
) -> Result<Vec<Instruction>> {
    let sync_native = spl_token::instruction::sync_native(&spl_token::ID, wsol_ata)
        .map_err(|e| SwapperError::TokenInstruction(e.to_string()))?;
    Ok(vec![
        system_instruction::transfer(user, wsol_ata, lamports),
        sync_native,
    ])
}
