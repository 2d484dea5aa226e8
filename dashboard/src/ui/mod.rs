//! # Plain-Text Rendering
//!
//! Turns the session snapshot and dashboard state into the text printed by
//! the command loop.
//!
//! ```text
//! ── Wallet ─────────────────────────────
//!   Status   Connected
//!   Account  0x742d...f44e
//!   Network  Sepolia Testnet
//!   Balance  1.2500 ETH
//! ── Send ───────────────────────────────
//!   Pending  0x5c50...2cd1
//! ```

use std::fmt::Write;

use shared::dto::transaction::{TransactionRecord, TransferDirection};
use shared::utils::{format_address, truncate_address};

use crate::app::{DashboardState, HistoryState, NoticeLevel, SendStatus, TokenLookup};
use crate::session::SessionSnapshot;
use crate::utils::units::{format_ether, format_units_fixed, ETHER_DECIMALS};

const RULE_WIDTH: usize = 40;

fn heading(out: &mut String, title: &str) {
    let dashes = RULE_WIDTH.saturating_sub(title.len() + 4);
    let _ = writeln!(out, "── {} {}", title, "─".repeat(dashes));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<8} {}", label, value);
}

/// Full dashboard summary
pub fn render_summary(session: &SessionSnapshot, state: &DashboardState) -> String {
    let mut out = String::new();
    render_session(&mut out, session);
    render_token(&mut out, &state.token);
    render_send(&mut out, &state.send);
    if let Some(notice) = state.notices.last() {
        heading(&mut out, "Last");
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        row(&mut out, tag, &notice.message);
    }
    out
}

fn render_session(out: &mut String, session: &SessionSnapshot) {
    heading(out, "Wallet");
    row(out, "Status", session.status.label());
    if let Some(address) = session.short_address() {
        row(out, "Account", &address);
    }
    if let Some(label) = session.network_label.as_deref() {
        row(out, "Network", label);
    }
    if let Some(balance) = session.balance_display() {
        row(out, "Balance", &balance);
    } else if session.is_connected() {
        row(out, "Balance", "loading...");
    }
    if let Some(error) = session.last_error.as_deref() {
        row(out, "Error", error);
    }
}

fn render_token(out: &mut String, token: &TokenLookup) {
    match token {
        TokenLookup::Idle => {}
        TokenLookup::Loading { contract } => {
            heading(out, "Token");
            row(out, "Loading", &truncate_address(&contract.to_string()));
        }
        TokenLookup::Loaded(balance) => {
            heading(out, "Token");
            row(out, "Name", &format!("{} ({})", balance.name, balance.symbol));
            row(out, "Contract", &truncate_address(&balance.contract.to_string()));
            row(out, "Balance", &format!("{} {}", balance.balance_display, balance.symbol));
        }
        TokenLookup::Failed { contract, message } => {
            heading(out, "Token");
            row(out, "Contract", &truncate_address(&contract.to_string()));
            row(out, "Error", message);
        }
    }
}

fn render_send(out: &mut String, send: &SendStatus) {
    let (label, value) = match send {
        SendStatus::Idle => return,
        SendStatus::Submitting => ("Waiting", "confirm in your wallet".to_string()),
        SendStatus::Pending { hash } => ("Pending", format_address(&hash.to_string(), 6, 4)),
        SendStatus::Confirmed { hash } => ("Sent", hash.to_string()),
        SendStatus::Failed { message } => ("Failed", message.clone()),
    };
    heading(out, "Send");
    row(out, label, &value);
}

/// One line per transaction, classified relative to `owner`
pub fn render_history(session: &SessionSnapshot, history: &HistoryState) -> String {
    let mut out = String::new();
    heading(&mut out, "History");
    match history {
        HistoryState::Idle => row(&mut out, "", "Not loaded. Type 'history'."),
        HistoryState::Loading => row(&mut out, "", "Loading..."),
        HistoryState::Failed(message) => row(&mut out, "Error", message),
        HistoryState::Loaded { owner, .. } if session.address != Some(*owner) => {
            row(&mut out, "", "Account changed. Type 'history' to reload.")
        }
        HistoryState::Loaded { records, .. } if records.is_empty() => {
            row(&mut out, "", "No transactions found")
        }
        HistoryState::Loaded { owner, records } => {
            let owner = owner.to_string();
            for record in records {
                let _ = writeln!(out, "  {}", history_line(record, &owner));
            }
        }
    }
    out
}

fn history_line(record: &TransactionRecord, owner: &str) -> String {
    let (arrow, counterparty) = match record.direction(owner) {
        TransferDirection::Incoming => ("IN ", record.from.clone()),
        TransferDirection::Outgoing => ("OUT", record.to.clone().unwrap_or_else(|| "contract creation".to_string())),
        TransferDirection::SelfTransfer => ("SELF", owner.to_string()),
        TransferDirection::Unrelated => ("-- ", record.from.clone()),
    };
    let status = if record.success { "" } else { " [failed]" };
    let call = if record.has_input { " [call]" } else { "" };

    format!(
        "{}  {:<4} {:>14} ETH  {}  {}{}{}",
        lib_utils::format_unix_timestamp(record.timestamp),
        arrow,
        format_units_fixed(record.value_wei, ETHER_DECIMALS, 4),
        truncate_address(&counterparty),
        format_address(&record.hash, 10, 4),
        status,
        call
    )
}

/// One-line balance for `refresh`
pub fn render_balance(session: &SessionSnapshot) -> String {
    match session.balance_minor {
        Some(wei) => format!("Balance: {} ETH", format_ether(wei)),
        None => "Balance unavailable".to_string(),
    }
}
