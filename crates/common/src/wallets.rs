use ethers::{
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};

use crate::ethereum::get_address_from_private_key;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: Address,
    pub private_key: Option<H256>,
}

impl Wallet {
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        let wallet = LocalWallet::new(rng);
        Self {
            address: wallet.address(),
            private_key: Some(H256::from_slice(&wallet.signer().to_bytes())),
        }
    }

    pub fn new_with_key(private_key: H256) -> anyhow::Result<Self> {
        Ok(Self {
            address: get_address_from_private_key(&private_key)?,
            private_key: Some(private_key),
        })
    }

    pub fn empty() -> Self {
        Self {
            address: Address::zero(),
            private_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn wallet_address_matches_key() {
        let wallet = Wallet::new_with_key(
            H256::from_str("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(
            wallet.address,
            Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap()
        );
    }

    #[test]
    fn random_wallets_are_unique() {
        let mut rng = rand::thread_rng();
        let a = Wallet::random(&mut rng);
        let b = Wallet::random(&mut rng);
        assert_ne!(a.address, b.address);
        assert!(a.private_key.is_some());
    }
}
