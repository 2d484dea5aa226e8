//! Wallet dashboard binary: reads commands from stdin and prints a plain-text
//! summary after each command and each background result.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use dashboard::app::{App, AppEvent, Command, Services, HELP};
use dashboard::core::service::WalletProvider;
use dashboard::core::config::load_dotenv;
use dashboard::core::AppConfig;
use dashboard::services::{EtherscanClient, Erc20Reader, JsonRpcSubmitter, JsonRpcWallet, RpcClient};
use dashboard::session::SessionManager;
use dashboard::{debug, ui};

#[tokio::main]
async fn main() {
    // .env must be in the environment before the logger reads RUST_LOG
    let dotenv_path = load_dotenv();
    let _log_guard = debug::init_logger();
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(rpc_url = %config.rpc_url, "Starting wallet dashboard");

    let rpc = Arc::new(RpcClient::new(config.rpc_url.clone()));
    let provider: Arc<dyn WalletProvider> =
        Arc::new(JsonRpcWallet::new(rpc.clone(), config.poll_interval));
    let (session, event_loop) = SessionManager::new(provider, config.event_queue);
    let loop_handle = event_loop.spawn();

    let services = Services {
        tokens: Arc::new(Erc20Reader::new(rpc.clone())),
        submitter: Arc::new(JsonRpcSubmitter::new(rpc, config.confirm_timeout)),
        history: Arc::new(EtherscanClient::new(config.explorer_api_key.clone())),
    };
    let app = App::new(session, services, &config);

    println!("Wallet dashboard - provider at {}", config.rpc_url);
    println!("Type 'help' for commands.");
    run(&app).await;

    app.shutdown();
    let _ = loop_handle.await;
    tracing::info!("Wallet dashboard stopped");
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_summary(app: &App) {
    let snapshot = app.session.snapshot();
    let state = app.state.read();
    println!("{}", ui::render_summary(&snapshot, &state));
}

async fn run(app: &App) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !execute(app, &line) {
                        break;
                    }
                    prompt();
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            },
            event = app.event_rx.recv() => match event {
                Ok(event) => {
                    println!();
                    match event {
                        AppEvent::HistoryResult { .. } => {
                            app.handle_event(event);
                            let snapshot = app.session.snapshot();
                            let history = app.state.read().history.clone();
                            println!("{}", ui::render_history(&snapshot, &history));
                        }
                        AppEvent::BalanceRefreshed(snapshot) => {
                            println!("{}", ui::render_balance(&snapshot));
                            app.handle_event(AppEvent::BalanceRefreshed(snapshot));
                        }
                        other => {
                            app.handle_event(other);
                            print_summary(app);
                        }
                    }
                    prompt();
                }
                Err(_) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }
}

/// Run one command line; returns false on `quit`
fn execute(app: &App, line: &str) -> bool {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return true,
        Err(message) => {
            println!("{}", message);
            return true;
        }
    };
    tracing::debug!(command = ?command, "Command");

    let result = match command {
        Command::Connect => {
            app.handle_connect();
            println!("Connecting... approve the request in your wallet.");
            return true;
        }
        Command::Disconnect => {
            app.handle_disconnect();
            Ok(())
        }
        Command::Refresh => app.handle_refresh(),
        Command::Status => Ok(()),
        Command::Token(contract) => app.handle_token_lookup(&contract),
        Command::Send { to, amount } => app.handle_send(&to, &amount),
        Command::History(limit) => app.handle_history(limit),
        Command::ResetSend => {
            if !app.reset_send() {
                println!("A transaction is still in progress");
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", HELP);
            return true;
        }
        Command::Quit => return false,
    };

    match result {
        Ok(()) => print_summary(app),
        Err(e) => println!("{}", e),
    }
    true
}
