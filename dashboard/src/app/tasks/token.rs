//! # Token Tasks
//!
//! ERC-20 balance lookup: `name`, `symbol`, `decimals` and `balanceOf` are
//! read concurrently.

use std::sync::Arc;

use alloy_primitives::Address;
use async_channel::Sender;
use shared::dto::token::TokenBalance;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::core::error::ProviderError;
use crate::core::service::TokenReader;
use crate::utils::units::format_units_fixed;

/// Fractional digits shown for token balances
const TOKEN_DISPLAY_PRECISION: usize = 4;

/// Read all four ERC-20 fields and assemble a [`TokenBalance`].
pub async fn read_token_balance(
    tokens: &dyn TokenReader,
    contract: Address,
    owner: Address,
) -> Result<TokenBalance, ProviderError> {
    let (name, symbol, decimals, balance_minor) = futures::try_join!(
        tokens.name(contract),
        tokens.symbol(contract),
        tokens.decimals(contract),
        tokens.balance_of(contract, owner),
    )?;

    let precision = TOKEN_DISPLAY_PRECISION.min(decimals as usize);
    Ok(TokenBalance {
        contract,
        owner,
        name,
        symbol,
        decimals,
        balance_minor,
        balance_display: format_units_fixed(balance_minor, decimals, precision),
    })
}

/// Spawn a lookup and report the result as [`AppEvent::TokenResult`].
pub(crate) fn lookup_token(
    tokens: Arc<dyn TokenReader>,
    contract: Address,
    owner: Address,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let result = read_token_balance(tokens.as_ref(), contract, owner).await;
        match &result {
            Ok(balance) => tracing::info!(
                contract = %contract,
                symbol = %balance.symbol,
                balance = %balance.balance_display,
                "Token balance loaded"
            ),
            Err(e) => tracing::warn!(contract = %contract, error = %e, "Token lookup failed"),
        }
        let _ = event_tx
            .send(AppEvent::TokenResult {
                owner,
                contract,
                result: result.map_err(|e| e.to_string()),
            })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::{MockTokenReader, ALICE};

    #[tokio::test]
    async fn test_read_token_balance() {
        let reader = MockTokenReader::usdc();
        let balance = read_token_balance(&reader, reader.contract, ALICE).await.unwrap();

        assert_eq!(balance.symbol, "USDC");
        assert_eq!(balance.name, "USD Coin");
        assert_eq!(balance.decimals, 6);
        assert_eq!(balance.balance_display, "1,234.5678");
    }

    #[tokio::test]
    async fn test_non_token_contract_fails() {
        let reader = MockTokenReader::usdc();
        let err = read_token_balance(&reader, Address::repeat_byte(0xee), ALICE)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("execution reverted"));
    }
}
