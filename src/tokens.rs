//! Static registry of the tokens the console can display and swap.

/// Wrapped SOL mint on mainnet.
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub mint: &'static str,
    pub decimals: u8,
}

pub const SUPPORTED: [Token; 2] = [
    Token {
        symbol: "SOL",
        name: "Solana",
        mint: SOL_MINT,
        decimals: 9,
    },
    Token {
        symbol: "USDC",
        name: "USD Coin",
        mint: USDC_MINT,
        decimals: 6,
    },
];

pub fn find(symbol: &str) -> Option<&'static Token> {
    SUPPORTED.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

pub fn find_by_mint(mint: &str) -> Option<&'static Token> {
    SUPPORTED.iter().find(|t| t.mint == mint)
}

/// Convert a raw on-chain amount to UI units using the token's decimals.
pub fn ui_amount(raw: u64, decimals: u8) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}
