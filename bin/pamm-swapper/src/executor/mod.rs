use crate::error::Result;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

mod rpc;
mod simulate;

pub use rpc::*;
pub use simulate::*;

#[async_trait::async_trait]
pub trait Executor: Sync + Send {
    fn name(&self) -> &'static str;

    async fn execute(&self, rpc_client: &RpcClient, transaction: Transaction) -> Result<Signature>;
}
