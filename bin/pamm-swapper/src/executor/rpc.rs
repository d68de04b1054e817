use crate::error::Result;
use crate::executor::Executor;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::time::Instant;
use tracing::info;

/// 发送交易并等待确认
pub struct RpcExecutor;

#[async_trait::async_trait]
impl Executor for RpcExecutor {
    fn name(&self) -> &'static str {
        "Rpc"
    }

    async fn execute(&self, rpc_client: &RpcClient, transaction: Transaction) -> Result<Signature> {
        let start = Instant::now();
        let signature = rpc_client.send_and_confirm_transaction(&transaction).await?;
        info!(
            "交易已确认, 耗时 : {:>4.2}ms, signature : {}",
            start.elapsed().as_micros() as f64 / 1000.0,
            signature
        );
        Ok(signature)
    }
}
