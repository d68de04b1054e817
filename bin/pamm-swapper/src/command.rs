use crate::config::SwapConfig;
use crate::dex::pump_amm::fetch_pool;
use crate::executor::{Executor, RpcExecutor, SimulateExecutor};
use crate::interface::ProgramIds;
use crate::swapper::SwapContext;
use clap::{ArgAction, Parser, Subcommand};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pamm-swapper", about = "通过代理程序在 pump AMM 池子买卖")]
pub struct Command {
    #[arg(long, env = "RPC_URL", default_value = "https://api.mainnet-beta.solana.com")]
    rpc_url: String,
    #[arg(long, env = "KEYPAIR_PATH", default_value = "~/.config/solana/id.json")]
    keypair_path: String,
    #[arg(
        long,
        env = "PAMM_PROGRAM_ID",
        default_value = "pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA"
    )]
    pamm_program_id: Pubkey,
    #[arg(
        long,
        env = "FEE_PROGRAM_ID",
        default_value = "pfeeUxB6jkeY1Hxd7CsFCAjcbHA9rWtchMGdZ6VojVZ"
    )]
    fee_program_id: Pubkey,
    #[arg(
        long,
        env = "ATA_PROGRAM_ID",
        default_value = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
    )]
    ata_program_id: Pubkey,
    #[arg(
        long,
        env = "PROXY_PROGRAM_ID",
        default_value = "7vbo8W8myMRKZRogqsF5u4RwZtUhN7BaFJR41StrhPkU"
    )]
    proxy_program_id: Pubkey,
    #[arg(long, env = "POOL")]
    pool: Option<Pubkey>,
    #[arg(long, env = "PAMM_GLOBAL_CONFIG")]
    global_config: Option<Pubkey>,
    #[arg(long, env = "PAMM_FEE_RECIPIENT")]
    fee_recipient: Option<Pubkey>,
    #[arg(long, env = "CU_LIMIT", default_value = "500000")]
    cu_limit: u32,
    #[arg(long, env = "PRIORITY_FEE", default_value = "2000")]
    priority_fee: u64,
    /// 只模拟不上链
    #[arg(long, default_value = "false")]
    simulate: bool,
    #[arg(long, default_value = "false")]
    no_create_ata: bool,
    #[arg(long, default_value = "false")]
    no_wrap_sol: bool,
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 读取并打印池子数据
    Pool,
    Buy {
        #[arg(long, env = "BASE_OUT", default_value = "1000000")]
        base_amount_out: u64,
        #[arg(long, env = "MAX_QUOTE_IN", default_value = "5000000")]
        max_quote_amount_in: u64,
        #[arg(long, default_value = "true", action = ArgAction::Set)]
        track_volume: bool,
    },
    Sell {
        #[arg(long, env = "BASE_IN", default_value = "500000")]
        base_amount_in: u64,
        #[arg(long, env = "MIN_QUOTE_OUT", default_value = "2000000")]
        min_quote_amount_out: u64,
    },
}

impl Command {
    pub fn to_config(&self) -> SwapConfig {
        SwapConfig {
            program_ids: ProgramIds {
                pamm: self.pamm_program_id,
                fee: self.fee_program_id,
                ata: self.ata_program_id,
                proxy: self.proxy_program_id,
            },
            pool: self.pool,
            global_config: self.global_config,
            protocol_fee_recipient: self.fee_recipient,
            cu_limit: self.cu_limit,
            priority_fee: self.priority_fee,
            create_ata: !self.no_create_ata,
            wrap_sol: !self.no_wrap_sol,
        }
    }
}

pub async fn start_with_custom(command: Command) -> anyhow::Result<()> {
    info!("{:#?}", command);
    let config = command.to_config();
    let pool_id = config.pool()?;
    let rpc_client = Arc::new(RpcClient::new_with_commitment(
        command.rpc_url.clone(),
        CommitmentConfig::confirmed(),
    ));
    let signature = match command.action.clone() {
        Action::Pool => {
            let pool = fetch_pool(&rpc_client, &pool_id, &config.program_ids.pamm).await?;
            info!("【Pool】{}", serde_json::to_string_pretty(&pool)?);
            return Ok(());
        }
        Action::Buy {
            base_amount_out,
            max_quote_amount_in,
            track_volume,
        } => {
            swap_context(&command, rpc_client, config)?
                .buy(&pool_id, base_amount_out, max_quote_amount_in, track_volume)
                .await?
        }
        Action::Sell {
            base_amount_in,
            min_quote_amount_out,
        } => {
            swap_context(&command, rpc_client, config)?
                .sell(&pool_id, base_amount_in, min_quote_amount_out)
                .await?
        }
    };
    info!("tx : {}", signature);
    Ok(())
}

fn swap_context(
    command: &Command,
    rpc_client: Arc<RpcClient>,
    config: SwapConfig,
) -> anyhow::Result<SwapContext> {
    let payer = Arc::new(crate::metadata::get_keypair(command.keypair_path.as_str())?);
    let executor: Arc<dyn Executor> = if command.simulate {
        Arc::new(SimulateExecutor)
    } else {
        Arc::new(RpcExecutor)
    };
    Ok(SwapContext::new(rpc_client, payer, config, executor))
}
