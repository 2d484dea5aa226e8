//! In-memory service doubles for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use async_channel::Sender;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::rpc::{TransactionRequest, USER_REJECTED_CODE};
use shared::dto::transaction::TransactionRecord;
use tokio::sync::Notify;

use crate::core::error::{AppError, ProviderError};
use crate::core::service::{
    HistoryApi, ProviderEvent, ProviderEventKind, SubscriptionId, TokenReader,
    TransactionSubmitter, WalletProvider,
};

pub const ALICE: Address = Address::repeat_byte(0xa1);
pub const BOB: Address = Address::repeat_byte(0xb0);

fn rejection() -> ProviderError {
    ProviderError::Rpc {
        code: USER_REJECTED_CODE,
        message: "User rejected the request.".to_string(),
    }
}

/// Scriptable wallet provider
pub struct MockWalletProvider {
    available: AtomicBool,
    accounts: Mutex<Vec<Address>>,
    balances: Mutex<HashMap<Address, U256>>,
    fail_balance: AtomicBool,
    chain_id: AtomicU64,
    reject_next: AtomicBool,
    gate: Mutex<Option<Arc<Notify>>>,
    pub request_count: AtomicUsize,
    pub balance_count: AtomicUsize,
    pub subscribe_count: AtomicUsize,
    subscribers: Mutex<HashMap<SubscriptionId, (ProviderEventKind, Sender<ProviderEvent>)>>,
}

impl MockWalletProvider {
    /// Reachable provider on mainnet exposing ALICE with 2 ETH
    pub fn new() -> Self {
        let mut balances = HashMap::new();
        balances.insert(ALICE, U256::from(2_000_000_000_000_000_000u128));
        balances.insert(BOB, U256::from(500_000_000_000_000_000u128));
        Self {
            available: AtomicBool::new(true),
            accounts: Mutex::new(vec![ALICE, BOB]),
            balances: Mutex::new(balances),
            fail_balance: AtomicBool::new(false),
            chain_id: AtomicU64::new(1),
            reject_next: AtomicBool::new(false),
            gate: Mutex::new(None),
            request_count: AtomicUsize::new(0),
            balance_count: AtomicUsize::new(0),
            subscribe_count: AtomicUsize::new(0),
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn set_balance(&self, address: Address, wei: U256) {
        self.balances.lock().insert(address, wei);
    }

    pub fn set_fail_balance(&self, fail: bool) {
        self.fail_balance.store(fail, Ordering::SeqCst);
    }

    pub fn reject_next_request(&self) {
        self.reject_next.store(true, Ordering::SeqCst);
    }

    /// Make `request_accounts` wait until the returned handle is notified
    pub fn hold_requests(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock() = Some(notify.clone());
        notify
    }

    pub fn requests(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    pub fn balance_reads(&self) -> usize {
        self.balance_count.load(Ordering::SeqCst)
    }

    pub fn subscribes(&self) -> usize {
        self.subscribe_count.load(Ordering::SeqCst)
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Deliver a notification to every matching subscriber
    pub fn emit(&self, event: ProviderEvent) {
        let targets: Vec<Sender<ProviderEvent>> = self
            .subscribers
            .lock()
            .values()
            .filter(|(kind, _)| *kind == event.kind())
            .map(|(_, tx)| tx.clone())
            .collect();
        for tx in targets {
            let _ = tx.try_send(event.clone());
        }
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn probe(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.reject_next.swap(false, Ordering::SeqCst) {
            return Err(rejection());
        }
        Ok(self.accounts.lock().clone())
    }

    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError> {
        self.balance_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(ProviderError::Transport("timed out".to_string()));
        }
        Ok(self.balances.lock().get(&address).copied().unwrap_or(U256::ZERO))
    }

    async fn get_chain_id(&self) -> Result<u64, ProviderError> {
        Ok(self.chain_id.load(Ordering::SeqCst))
    }

    fn subscribe(&self, kind: ProviderEventKind, sender: Sender<ProviderEvent>) -> SubscriptionId {
        self.subscribe_count.fetch_add(1, Ordering::SeqCst);
        let id = SubscriptionId::new();
        self.subscribers.lock().insert(id, (kind, sender));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().remove(&id);
    }
}

/// ERC-20 reader backed by a single fake token
pub struct MockTokenReader {
    pub contract: Address,
    pub balance: U256,
    pub decimals: u8,
}

impl MockTokenReader {
    pub fn usdc() -> Self {
        Self {
            contract: Address::repeat_byte(0xc0),
            balance: U256::from(1_234_567_891u64),
            decimals: 6,
        }
    }

    fn check(&self, token: Address) -> Result<(), ProviderError> {
        if token == self.contract {
            Ok(())
        } else {
            Err(ProviderError::Rpc {
                code: -32000,
                message: "execution reverted".to_string(),
            })
        }
    }
}

#[async_trait]
impl TokenReader for MockTokenReader {
    async fn balance_of(&self, token: Address, _owner: Address) -> Result<U256, ProviderError> {
        self.check(token)?;
        Ok(self.balance)
    }

    async fn symbol(&self, token: Address) -> Result<String, ProviderError> {
        self.check(token)?;
        Ok("USDC".to_string())
    }

    async fn decimals(&self, token: Address) -> Result<u8, ProviderError> {
        self.check(token)?;
        Ok(self.decimals)
    }

    async fn name(&self, token: Address) -> Result<String, ProviderError> {
        self.check(token)?;
        Ok("USD Coin".to_string())
    }
}

/// Submitter that records requests and can be told to reject or revert
pub struct MockSubmitter {
    pub sent: Mutex<Vec<TransactionRequest>>,
    reject: AtomicBool,
    revert: AtomicBool,
}

impl MockSubmitter {
    pub const HASH: B256 = B256::repeat_byte(0x77);

    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: AtomicBool::new(false),
            revert: AtomicBool::new(false),
        }
    }

    pub fn set_reject(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }

    pub fn set_revert(&self, revert: bool) {
        self.revert.store(revert, Ordering::SeqCst);
    }
}

#[async_trait]
impl TransactionSubmitter for MockSubmitter {
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, ProviderError> {
        if self.reject.load(Ordering::SeqCst) {
            return Err(rejection());
        }
        self.sent.lock().push(request);
        Ok(Self::HASH)
    }

    async fn wait(&self, hash: B256) -> Result<B256, ProviderError> {
        if self.revert.load(Ordering::SeqCst) {
            return Err(ProviderError::Rpc {
                code: -32000,
                message: "Transaction reverted".to_string(),
            });
        }
        Ok(hash)
    }
}

/// History source returning a fixed list
pub struct MockHistory {
    pub records: Vec<TransactionRecord>,
}

#[async_trait]
impl HistoryApi for MockHistory {
    async fn list_transactions(
        &self,
        chain_id: u64,
        _address: Address,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>, AppError> {
        if chain_id == 31337 {
            return Err(AppError::Validation(format!(
                "Transaction history is not available on chain {}",
                chain_id
            )));
        }
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}
