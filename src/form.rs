use std::collections::HashMap;
use thiserror::Error;

use crate::tokens::Token;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("please connect your wallet first")]
    NotConnected,
    #[error("please fill in all fields")]
    MissingFields,
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("insufficient {0} balance")]
    InsufficientBalance(&'static str),
}

/// A validated swap request, ready to be handed to an execution layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRequest {
    pub from_token: &'static str,
    pub to_token: &'static str,
    pub from_amount: f64,
    /// Raw user-entered receive amount, informational only.
    pub to_amount: String,
}

/// Swap form state: token selections, amount entries, fetched balances
/// and the in-flight fetch flag.
#[derive(Default)]
pub struct SwapForm {
    from_token: Option<&'static Token>,
    to_token: Option<&'static Token>,
    from_amount: String,
    to_amount: String,
    balances: HashMap<String, f64>,
    loading: bool,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from(&mut self, token: &'static Token) {
        self.from_token = Some(token);
    }

    pub fn set_to(&mut self, token: &'static Token) {
        self.to_token = Some(token);
    }

    pub fn set_from_amount(&mut self, amount: &str) {
        self.from_amount = amount.to_string();
    }

    pub fn set_to_amount(&mut self, amount: &str) {
        self.to_amount = amount.to_string();
    }

    pub fn from_token(&self) -> Option<&'static Token> {
        self.from_token
    }

    pub fn to_token(&self) -> Option<&'static Token> {
        self.to_token
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    /// Exchange the from/to token selections and both amount entries.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    pub fn set_balances(&mut self, balances: HashMap<String, f64>) {
        self.balances = balances;
    }

    pub fn clear_balances(&mut self) {
        self.balances.clear();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn balance_of(&self, symbol: &str) -> f64 {
        self.balances.get(symbol).copied().unwrap_or(0.0)
    }

    /// Fetched balance formatted for display, "0" when absent.
    pub fn balance_display(&self, symbol: &str) -> String {
        match self.balances.get(symbol) {
            Some(balance) => format!("{:.4}", balance),
            None => "0".to_string(),
        }
    }

    /// Whether the swap control is enabled: the form must be complete
    /// and no balance fetch may be in flight.
    pub fn can_submit(&self, connected: bool) -> bool {
        connected
            && self.from_token.is_some()
            && self.to_token.is_some()
            && !self.from_amount.is_empty()
            && !self.loading
    }

    /// Validate the form and build the swap request. A missing balance
    /// entry counts as zero.
    pub fn validate(&self, connected: bool) -> Result<SwapRequest, FormError> {
        if !connected {
            return Err(FormError::NotConnected);
        }
        let (from, to) = match (self.from_token, self.to_token) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(FormError::MissingFields),
        };
        if self.from_amount.is_empty() {
            return Err(FormError::MissingFields);
        }
        let amount: f64 = self
            .from_amount
            .parse()
            .map_err(|_| FormError::InvalidAmount(self.from_amount.clone()))?;
        if amount > self.balance_of(from.symbol) {
            return Err(FormError::InsufficientBalance(from.symbol));
        }
        Ok(SwapRequest {
            from_token: from.symbol,
            to_token: to.symbol,
            from_amount: amount,
            to_amount: self.to_amount.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    fn filled_form() -> SwapForm {
        let mut form = SwapForm::new();
        form.set_from(tokens::find("SOL").unwrap());
        form.set_to(tokens::find("USDC").unwrap());
        form.set_from_amount("1.5");
        form.set_to_amount("250");
        form.set_balances(HashMap::from([
            ("SOL".to_string(), 2.0),
            ("USDC".to_string(), 42.1),
        ]));
        form
    }

    #[test]
    fn accepts_a_complete_form() {
        let req = filled_form().validate(true).unwrap();
        assert_eq!(
            req,
            SwapRequest {
                from_token: "SOL",
                to_token: "USDC",
                from_amount: 1.5,
                to_amount: "250".to_string(),
            }
        );
    }

    #[test]
    fn rejects_when_not_connected() {
        assert_eq!(filled_form().validate(false), Err(FormError::NotConnected));
    }

    #[test]
    fn rejects_missing_from_token() {
        let mut form = filled_form();
        form.from_token = None;
        assert_eq!(form.validate(true), Err(FormError::MissingFields));
    }

    #[test]
    fn rejects_missing_to_token() {
        let mut form = filled_form();
        form.to_token = None;
        assert_eq!(form.validate(true), Err(FormError::MissingFields));
    }

    #[test]
    fn rejects_missing_amount() {
        let mut form = filled_form();
        form.set_from_amount("");
        assert_eq!(form.validate(true), Err(FormError::MissingFields));
    }

    #[test]
    fn rejects_unparsable_amount() {
        let mut form = filled_form();
        form.set_from_amount("lots");
        assert_eq!(
            form.validate(true),
            Err(FormError::InvalidAmount("lots".to_string()))
        );
    }

    #[test]
    fn rejects_amount_over_balance() {
        let mut form = filled_form();
        form.set_from_amount("2.5");
        assert_eq!(
            form.validate(true),
            Err(FormError::InsufficientBalance("SOL"))
        );
    }

    #[test]
    fn missing_balance_counts_as_zero() {
        let mut form = filled_form();
        form.clear_balances();
        assert_eq!(
            form.validate(true),
            Err(FormError::InsufficientBalance("SOL"))
        );
    }

    #[test]
    fn flip_exchanges_all_four_values() {
        let mut form = filled_form();
        form.flip();
        assert_eq!(form.from_token().unwrap().symbol, "USDC");
        assert_eq!(form.to_token().unwrap().symbol, "SOL");
        assert_eq!(form.from_amount(), "250");
        assert_eq!(form.to_amount(), "1.5");
    }

    #[test]
    fn balance_display_shows_zero_when_absent() {
        let mut form = filled_form();
        assert_eq!(form.balance_display("SOL"), "2.0000");
        assert_eq!(form.balance_display("USDC"), "42.1000");
        form.clear_balances();
        assert_eq!(form.balance_display("SOL"), "0");
    }

    #[test]
    fn can_submit_requires_a_complete_idle_form() {
        let form = filled_form();
        assert!(form.can_submit(true));
        assert!(!form.can_submit(false));

        let mut incomplete = filled_form();
        incomplete.set_from_amount("");
        assert!(!incomplete.can_submit(true));

        let mut loading = filled_form();
        loading.set_loading(true);
        assert!(!loading.can_submit(true));
        loading.set_loading(false);
        assert!(loading.can_submit(true));
    }

    #[test]
    fn submit_stays_available_over_balance() {
        // The control only gates on completeness; the balance check
        // happens at validation time.
        let mut form = filled_form();
        form.set_from_amount("99");
        assert!(form.can_submit(true));
        assert!(form.validate(true).is_err());
    }
}
