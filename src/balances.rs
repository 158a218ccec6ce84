//! Read-only balance queries: the owner's native balance plus its SPL
//! token accounts, mapped onto the supported token registry.

use anyhow::Result;
use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

use crate::tokens;

/// Fetch balances for every supported token held by `owner`, keyed by
/// symbol. Token accounts with unknown mints are ignored. No retry and
/// no caching; errors are left to the caller.
pub async fn fetch_balances(rpc: &RpcClient, owner: &Pubkey) -> Result<HashMap<String, f64>> {
    let lamports = rpc.get_balance(owner).await?;
    let mut balances = HashMap::new();
    balances.insert("SOL".to_string(), lamports as f64 / LAMPORTS_PER_SOL as f64);

    let accounts = rpc
        .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(spl_token::id()))
        .await?;
    for keyed in accounts {
        if let Some((symbol, amount)) = token_entry(&keyed.account.data) {
            balances.insert(symbol.to_string(), amount);
        }
    }
    Ok(balances)
}

/// Map one parsed token account onto a registry token. The RPC returns
/// jsonParsed account data; the UI amount is preferred, with a fallback
/// to the raw amount scaled by the token's decimals.
fn token_entry(data: &UiAccountData) -> Option<(&'static str, f64)> {
    let parsed = match data {
        UiAccountData::Json(parsed) => parsed,
        _ => return None,
    };
    let info = &parsed.parsed["info"];
    let token = tokens::find_by_mint(info["mint"].as_str()?)?;
    let amount = match info["tokenAmount"]["uiAmount"].as_f64() {
        Some(ui) => ui,
        None => {
            let raw = info["tokenAmount"]["amount"].as_str()?.parse::<u64>().ok()?;
            tokens::ui_amount(raw, token.decimals)
        }
    };
    Some((token.symbol, amount))
}
