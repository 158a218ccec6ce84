use anyhow::{anyhow, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

/// Wallet session for the console.
///
/// Holds the signing keypair once connected; the rest of the application
/// only reads connection status and the public key.
pub struct Wallet {
    encoded_key: String,
    session: Option<Keypair>,
}

impl Wallet {
    pub fn new(encoded_key: String) -> Self {
        Self {
            encoded_key,
            session: None,
        }
    }

    /// Decode the configured base58 keypair and open a session.
    /// Connecting while already connected is a no-op.
    pub fn connect(&mut self) -> Result<Pubkey> {
        if let Some(keypair) = &self.session {
            log::info!("Wallet already connected: {}", keypair.pubkey());
            return Ok(keypair.pubkey());
        }
        if self.encoded_key.is_empty() {
            return Err(anyhow!("no wallet keypair configured"));
        }
        let keypair = Keypair::from_bytes(&bs58::decode(&self.encoded_key).into_vec()?)?;
        let pubkey = keypair.pubkey();
        log::info!("Wallet connected: {}", pubkey);
        self.session = Some(keypair);
        Ok(pubkey)
    }

    pub fn disconnect(&mut self) {
        if self.session.take().is_some() {
            log::info!("Wallet disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn pubkey(&self) -> Option<Pubkey> {
        self.session.as_ref().map(|keypair| keypair.pubkey())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_keypair() -> String {
        bs58::encode(Keypair::new().to_bytes()).into_string()
    }

    #[test]
    fn connects_and_disconnects() {
        let mut wallet = Wallet::new(encoded_keypair());
        assert!(!wallet.is_connected());
        assert!(wallet.pubkey().is_none());

        let pubkey = wallet.connect().unwrap();
        assert!(wallet.is_connected());
        assert_eq!(wallet.pubkey(), Some(pubkey));

        wallet.disconnect();
        assert!(!wallet.is_connected());
        assert!(wallet.pubkey().is_none());
    }

    #[test]
    fn reconnect_keeps_the_same_key() {
        let mut wallet = Wallet::new(encoded_keypair());
        let first = wallet.connect().unwrap();
        let second = wallet.connect().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(Wallet::new(String::new()).connect().is_err());
        assert!(Wallet::new("not-base58!!".to_string()).connect().is_err());
        assert!(Wallet::new("abc".to_string()).connect().is_err());
    }
}
