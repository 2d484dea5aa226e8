//! # Send Tasks
//!
//! Drives one ETH transfer through `Submitting → Pending → Confirmed | Failed`,
//! reporting every step as [`AppEvent::SendStatusChanged`].

use std::sync::Arc;

use async_channel::Sender;
use shared::dto::rpc::TransactionRequest;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::SendStatus;
use crate::core::error::ProviderError;
use crate::core::service::TransactionSubmitter;
use crate::session::SessionManager;

/// Failure text shown when the wallet user declines the transaction
pub const SEND_REJECTED_MESSAGE: &str = "Transaction rejected by user";

fn failure_message(err: &ProviderError) -> String {
    if err.is_user_rejection() {
        SEND_REJECTED_MESSAGE.to_string()
    } else {
        err.to_string()
    }
}

/// Submit, wait for the receipt, then refresh the session balance.
///
/// The caller has already moved the status to `Submitting`.
pub async fn run_send(
    submitter: &dyn TransactionSubmitter,
    session: &SessionManager,
    request: TransactionRequest,
    event_tx: &Sender<AppEvent>,
) -> SendStatus {
    let hash = match submitter.send_transaction(request).await {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!(error = %e, "Send rejected or failed before broadcast");
            return SendStatus::Failed {
                message: failure_message(&e),
            };
        }
    };

    let _ = event_tx.send(AppEvent::SendStatusChanged(SendStatus::Pending { hash })).await;

    match submitter.wait(hash).await {
        Ok(hash) => {
            session.refresh_balance().await;
            SendStatus::Confirmed { hash }
        }
        Err(e) => {
            tracing::warn!(hash = %hash, error = %e, "Transaction did not confirm");
            SendStatus::Failed {
                message: failure_message(&e),
            }
        }
    }
}

/// Spawn [`run_send`] and report its final status.
pub(crate) fn send_eth(
    submitter: Arc<dyn TransactionSubmitter>,
    session: SessionManager,
    request: TransactionRequest,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let status = run_send(submitter.as_ref(), &session, request, &event_tx).await;
        let _ = event_tx.send(AppEvent::SendStatusChanged(status)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockSubmitter, MockWalletProvider, ALICE, BOB};
    use alloy_primitives::U256;

    fn request() -> TransactionRequest {
        TransactionRequest {
            from: ALICE,
            to: BOB,
            value: U256::from(1_000u64),
        }
    }

    #[tokio::test]
    async fn test_confirmed_send_refreshes_balance() {
        let provider = Arc::new(MockWalletProvider::new());
        let (session, _loop) = SessionManager::new(provider.clone(), 8);
        session.connect().await.unwrap();
        provider.set_balance(ALICE, U256::from(42u64));
        let submitter = MockSubmitter::new();
        let (tx, rx) = async_channel::unbounded();

        let status = run_send(&submitter, &session, request(), &tx).await;

        assert_eq!(status, SendStatus::Confirmed { hash: MockSubmitter::HASH });
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::SendStatusChanged(SendStatus::Pending { .. })
        ));
        assert_eq!(session.snapshot().balance_minor, Some(U256::from(42u64)));
        assert_eq!(submitter.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_user_rejection_message() {
        let provider = Arc::new(MockWalletProvider::new());
        let (session, _loop) = SessionManager::new(provider, 8);
        let submitter = MockSubmitter::new();
        submitter.set_reject(true);
        let (tx, rx) = async_channel::unbounded();

        let status = run_send(&submitter, &session, request(), &tx).await;

        assert_eq!(
            status,
            SendStatus::Failed {
                message: SEND_REJECTED_MESSAGE.to_string()
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_reverted_transaction_fails() {
        let provider = Arc::new(MockWalletProvider::new());
        let (session, _loop) = SessionManager::new(provider, 8);
        let submitter = MockSubmitter::new();
        submitter.set_revert(true);
        let (tx, _rx) = async_channel::unbounded();

        let status = run_send(&submitter, &session, request(), &tx).await;

        assert!(matches!(status, SendStatus::Failed { message } if message.contains("reverted")));
    }
}
