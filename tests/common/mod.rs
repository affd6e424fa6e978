//! Shared scripted providers for integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use pos_client::rpc::{
    AddressInfo, AddressInfoProvider, OperationRecord, OperationRecordProvider, RpcError,
    RpcResult,
};

/// Install a log subscriber for the test binary. Later calls are no-ops, so
/// every test can invoke it unconditionally. Output honors `RUST_LOG` and is
/// captured per test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One scripted lookup outcome.
#[derive(Debug, Clone)]
pub enum Step {
    Records(Vec<OperationRecord>),
    Fail,
}

/// Operation-record provider that replays a script, then repeats a default
/// step forever. Counts every call it receives.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Step>>,
    default: Step,
    calls: AtomicU32,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Step>, default: Step) -> Self {
        Self {
            script: Mutex::new(script.into()),
            default,
            calls: AtomicU32::new(0),
        }
    }

    /// Provider that answers every lookup the same way.
    pub fn always(step: Step) -> Self {
        Self::new(Vec::new(), step)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OperationRecordProvider for ScriptedProvider {
    async fn fetch_operation_records(&self, _ids: &[String]) -> RpcResult<Vec<OperationRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default.clone());
        match step {
            Step::Records(records) => Ok(records),
            Step::Fail => Err(RpcError::Timeout(10)),
        }
    }
}

/// Address-info provider backed by a fixed record list.
#[allow(dead_code)]
pub struct FixedAddressBook {
    pub infos: Vec<AddressInfo>,
}

#[async_trait]
impl AddressInfoProvider for FixedAddressBook {
    async fn fetch_address_info(&self, _addresses: &[String]) -> RpcResult<Vec<AddressInfo>> {
        Ok(self.infos.clone())
    }
}

#[allow(dead_code)]
pub fn record(is_final: bool, in_blocks: &[&str], in_pool: bool) -> OperationRecord {
    OperationRecord {
        is_final,
        in_blocks: in_blocks.iter().map(|b| b.to_string()).collect(),
        in_pool,
    }
}
