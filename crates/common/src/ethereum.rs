use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, H256},
};
use url::Url;

pub type EthersClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub fn create_ethers_client(
    private_key: H256,
    rpc_url: Url,
    chain_id: Option<u64>,
) -> anyhow::Result<EthersClient> {
    let mut wallet = LocalWallet::from_bytes(private_key.as_bytes())?;
    if let Some(chain_id) = chain_id {
        wallet = wallet.with_chain_id(chain_id);
    }
    let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
    Ok(SignerMiddleware::new(provider, wallet))
}

pub fn get_address_from_private_key(private_key: &H256) -> anyhow::Result<Address> {
    let wallet = LocalWallet::from_bytes(private_key.as_bytes())?;
    Ok(wallet.address())
}
