use crate::balances;
use crate::command::Command;
use crate::config::AppConfig;
use crate::form::SwapForm;
use crate::tokens;
use crate::wallet::Wallet;
use anyhow::Result;
use futures_util::StreamExt;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::io::Write;
use tokio::io::AsyncBufReadExt;
use tokio_stream::wrappers::LinesStream;

/// Interactive session: owns the RPC client, the wallet session and the
/// swap form, and drives them from a stream of stdin commands.
pub struct App {
    rpc: RpcClient,
    wallet: Wallet,
    form: SwapForm,
}

impl App {
    pub fn new(cfg: AppConfig) -> Self {
        let rpc = RpcClient::new(cfg.rpc_url.clone());
        let wallet = Wallet::new(cfg.wallet_keypair.clone());
        Self {
            rpc,
            wallet,
            form: SwapForm::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("Solana swap console. Type 'help' for commands.");
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = LinesStream::new(reader.lines());
        prompt();
        while let Some(line) = lines.next().await {
            let line = line?;
            if line.trim().is_empty() {
                prompt();
                continue;
            }
            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(cmd) => self.handle_command(cmd).await,
                None => println!("Unrecognized command. Type 'help'."),
            }
            prompt();
        }
        Ok(())
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Connect => match self.wallet.connect() {
                Ok(pubkey) => {
                    println!("Wallet connected: {pubkey}");
                    self.refresh_balances().await;
                    self.print_balances();
                }
                Err(e) => println!("Connect failed: {e}"),
            },
            Command::Disconnect => {
                self.wallet.disconnect();
                self.form.clear_balances();
                println!("Wallet disconnected.");
            }
            Command::From(symbol) => match tokens::find(&symbol) {
                Some(token) => {
                    self.form.set_from(token);
                    println!(
                        "From: {} (balance {} {})",
                        token.symbol,
                        self.form.balance_display(token.symbol),
                        token.symbol
                    );
                }
                None => self.print_unknown_token(&symbol),
            },
            Command::To(symbol) => match tokens::find(&symbol) {
                Some(token) => {
                    self.form.set_to(token);
                    println!(
                        "To: {} (balance {} {})",
                        token.symbol,
                        self.form.balance_display(token.symbol),
                        token.symbol
                    );
                }
                None => self.print_unknown_token(&symbol),
            },
            Command::Amount(value) => {
                self.form.set_from_amount(&value);
                println!("Pay amount: {value}");
            }
            Command::ToAmount(value) => {
                self.form.set_to_amount(&value);
                println!("Receive amount: {value}");
            }
            Command::Flip => {
                self.form.flip();
                println!(
                    "Flipped: from {} / to {}",
                    self.form.from_token().map(|t| t.symbol).unwrap_or("-"),
                    self.form.to_token().map(|t| t.symbol).unwrap_or("-"),
                );
            }
            Command::Refresh => {
                if self.wallet.is_connected() {
                    self.refresh_balances().await;
                    self.print_balances();
                } else {
                    println!("Please connect your wallet first.");
                }
            }
            Command::Status => self.print_status(),
            Command::Swap => self.handle_swap(),
            Command::Help => print_help(),
            // Quit is handled by the run loop
            Command::Quit => {}
        }
    }

    fn handle_swap(&self) {
        match self.form.validate(self.wallet.is_connected()) {
            Ok(req) => {
                let owner = self
                    .wallet
                    .pubkey()
                    .map(|p| p.to_string())
                    .unwrap_or_default();
                log::info!(
                    "Swap initiated: {:?} owner {} ts {}",
                    req,
                    owner,
                    chrono::Utc::now().timestamp_millis()
                );
                println!(
                    "Swap request recorded: {} {} -> {}",
                    req.from_amount, req.from_token, req.to_token
                );
                // TODO: Implement quoting, transaction building and submission
                // for the recorded request.
            }
            Err(e) => println!("Swap blocked: {e}"),
        }
    }

    /// One fetch per connection-state change; failures are logged and
    /// leave the displayed balances at zero.
    async fn refresh_balances(&mut self) {
        let owner = match self.wallet.pubkey() {
            Some(owner) => owner,
            None => return,
        };
        println!("Loading balances...");
        self.form.set_loading(true);
        match balances::fetch_balances(&self.rpc, &owner).await {
            Ok(fetched) => {
                log::info!("Fetched {} balance entries for {}", fetched.len(), owner);
                self.form.set_balances(fetched);
            }
            Err(e) => {
                log::error!("Error fetching balances: {e}");
                self.form.clear_balances();
            }
        }
        self.form.set_loading(false);
    }

    fn print_balances(&self) {
        for token in &tokens::SUPPORTED {
            println!(
                "  {:>5}: {}",
                token.symbol,
                self.form.balance_display(token.symbol)
            );
        }
    }

    fn print_status(&self) {
        if self.form.is_loading() {
            println!("Loading balances...");
        }
        match self.wallet.pubkey() {
            Some(pubkey) => println!("Wallet: connected ({pubkey})"),
            None => println!("Wallet: not connected"),
        }
        match self.form.from_token() {
            Some(token) => println!(
                "From:   {} (balance {} {})",
                token.symbol,
                self.form.balance_display(token.symbol),
                token.symbol
            ),
            None => println!("From:   not selected"),
        }
        match self.form.to_token() {
            Some(token) => println!(
                "To:     {} (balance {} {})",
                token.symbol,
                self.form.balance_display(token.symbol),
                token.symbol
            ),
            None => println!("To:     not selected"),
        }
        let show = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        println!("Pay:     {}", show(self.form.from_amount()));
        println!("Receive: {}", show(self.form.to_amount()));
        let enabled = self.form.can_submit(self.wallet.is_connected());
        println!("Swap enabled: {}", if enabled { "yes" } else { "no" });
    }

    fn print_unknown_token(&self, symbol: &str) {
        let supported: Vec<&str> = tokens::SUPPORTED.iter().map(|t| t.symbol).collect();
        println!(
            "Unknown token '{}'. Supported: {}",
            symbol,
            supported.join(", ")
        );
    }

    pub async fn shutdown(&mut self) {
        self.wallet.disconnect();
        log::info!("Session closed");
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("Commands:");
    println!("  connect          open the wallet session and fetch balances");
    println!("  disconnect       close the wallet session");
    println!("  from <TOKEN>     select the token to pay with");
    println!("  to <TOKEN>       select the token to receive");
    println!("  amount <N>       amount to pay");
    println!("  toamount <N>     expected receive amount (informational)");
    println!("  flip             exchange the from/to selections and amounts");
    println!("  refresh          re-fetch balances");
    println!("  status           show the current form");
    println!("  swap             validate and record the swap request");
    println!("  quit             leave the console");
    let supported: Vec<String> = tokens::SUPPORTED
        .iter()
        .map(|t| format!("{} ({})", t.symbol, t.name))
        .collect();
    println!("Supported tokens: {}", supported.join(", "));
}
