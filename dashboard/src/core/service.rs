//! # Service Traits
//!
//! Traits for dependency injection at the seams where the dashboard talks to
//! something it does not own: the wallet provider, ERC-20 contracts, the
//! transaction submitter and the block explorer. Production implementations
//! live in [`crate::services`]; tests swap in in-memory mocks.

use alloy_primitives::{Address, B256, U256};
use async_channel::Sender;
use async_trait::async_trait;
use shared::dto::rpc::TransactionRequest;
use shared::dto::transaction::TransactionRecord;
use uuid::Uuid;

use crate::core::error::{AppError, ProviderError};

/// Provider notification channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEventKind {
    AccountsChanged,
    ChainChanged,
}

/// Notification emitted by the wallet provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// New account list; empty means the wallet locked or revoked access
    AccountsChanged(Vec<Address>),
    /// New chain id as the provider reports it (hex quantity)
    ChainChanged(String),
}

impl ProviderEvent {
    pub fn kind(&self) -> ProviderEventKind {
        match self {
            ProviderEvent::AccountsChanged(_) => ProviderEventKind::AccountsChanged,
            ProviderEvent::ChainChanged(_) => ProviderEventKind::ChainChanged,
        }
    }
}

/// Opaque handle returned by [`WalletProvider::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for wallet provider operations
///
/// Mirrors the EIP-1193 surface the dashboard relies on. Implementations must
/// never hold user keys themselves; consent and signing stay in the wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether a provider is reachable at all
    async fn probe(&self) -> bool;

    /// Ask for account access (may wait on a user consent prompt)
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Native balance in wei
    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError>;

    /// Current chain id
    async fn get_chain_id(&self) -> Result<u64, ProviderError>;

    /// Start delivering `kind` notifications into `sender`
    fn subscribe(&self, kind: ProviderEventKind, sender: Sender<ProviderEvent>) -> SubscriptionId;

    /// Stop a subscription; unknown ids are ignored
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Trait for read-only ERC-20 calls
#[async_trait]
pub trait TokenReader: Send + Sync {
    async fn balance_of(&self, token: Address, owner: Address) -> Result<U256, ProviderError>;

    async fn symbol(&self, token: Address) -> Result<String, ProviderError>;

    async fn decimals(&self, token: Address) -> Result<u8, ProviderError>;

    async fn name(&self, token: Address) -> Result<String, ProviderError>;
}

/// Trait for submitting value transfers through the wallet
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Hand the transaction to the wallet for signing and broadcast; returns the hash
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, ProviderError>;

    /// Wait until the transaction is mined; fails if it reverted or timed out
    async fn wait(&self, hash: B256) -> Result<B256, ProviderError>;
}

/// Trait for transaction history lookups
#[async_trait]
pub trait HistoryApi: Send + Sync {
    /// Most recent transactions first, at most `limit`
    async fn list_transactions(
        &self,
        chain_id: u64,
        address: Address,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>, AppError>;
}
