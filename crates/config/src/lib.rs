use anyhow::Context as _;
use serde::de::DeserializeOwned;

mod clients;
mod contracts;
mod deploy;
mod outputs;
mod roles;
#[cfg(test)]
mod test_utils;
pub mod traits;
mod wallets;

pub use clients::*;
pub use contracts::*;
pub use deploy::*;
pub use outputs::*;
pub use roles::*;
pub use wallets::*;

pub trait FromEnv: Sized {
    fn from_env() -> anyhow::Result<Self>;
}

/// Convenience function that loads the structure from the environment variables with the given prefix.
pub fn envy_load<T: DeserializeOwned>(name: &str, prefix: &str) -> anyhow::Result<T> {
    envy::prefixed(prefix)
        .from_env()
        .with_context(|| format!("Cannot load config <{name}>"))
}
