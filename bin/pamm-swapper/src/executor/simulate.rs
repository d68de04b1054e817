use crate::error::{Result, SwapperError};
use crate::executor::Executor;
use base64::engine::general_purpose;
use base64::Engine;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

/// 只模拟不上链，返回交易的第一个签名
pub struct SimulateExecutor;

#[async_trait::async_trait]
impl Executor for SimulateExecutor {
    fn name(&self) -> &'static str {
        "Simulate"
    }

    async fn execute(&self, rpc_client: &RpcClient, transaction: Transaction) -> Result<Signature> {
        if let Ok(bytes) = bincode::serialize(&transaction) {
            debug!("Base64 : {}", general_purpose::STANDARD.encode(bytes));
        }
        let result = rpc_client.simulate_transaction(&transaction).await?.value;
        for log in result.logs.iter().flatten() {
            info!("{}", log);
        }
        if let Some(err) = result.err {
            return Err(SwapperError::SimulationFailed(format!("{:?}", err)));
        }
        info!("模拟成功, CU : {:?}", result.units_consumed);
        Ok(transaction.signatures.first().cloned().unwrap_or_default())
    }
}
