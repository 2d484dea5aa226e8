//! # Text Commands
//!
//! Parser for the dashboard's command line.

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    Disconnect,
    Refresh,
    Status,
    Token(String),
    Send { to: String, amount: String },
    /// Optional entry count
    History(Option<usize>),
    /// Clear a finished send so a new one can be started
    ResetSend,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  connect                  Connect to the wallet provider
  disconnect               Forget the current session
  refresh                  Re-read the ETH balance
  status                   Show the dashboard summary
  token <contract>         Look up an ERC-20 balance
  send <to> <amount-eth>   Send ETH through the wallet
  reset                    Clear a finished send
  history [n]              List the latest n transactions
  help                     Show this help
  quit                     Exit";

impl Command {
    /// Parse a line. Empty input yields `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("connect", []) => Command::Connect,
            ("disconnect", []) => Command::Disconnect,
            ("refresh", []) => Command::Refresh,
            ("status", []) => Command::Status,
            ("token", [contract]) => Command::Token((*contract).to_string()),
            ("token", _) => return Err("Usage: token <contract>".to_string()),
            ("send", [to, amount]) => Command::Send {
                to: (*to).to_string(),
                amount: (*amount).to_string(),
            },
            ("send", _) => return Err("Usage: send <to> <amount-eth>".to_string()),
            ("history", []) => Command::History(None),
            ("history", [n]) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::History(Some(n)),
                _ => return Err(format!("Invalid history count '{}'", n)),
            },
            ("reset", []) => Command::ResetSend,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
        };
        Ok(Some(command))
    }
}
