//! Provider type definitions for read clients.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

use crate::error::{ContractError, Result};

/// The provider type used by read clients.
///
/// Type-erased so that clients do not carry the filler stack in their type.
pub type ReadProvider = DynProvider;

/// Build a read-only HTTP provider. No request is sent until the first call.
pub fn connect_http(rpc_url: &str) -> Result<ReadProvider> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

    Ok(ProviderBuilder::new().connect_http(url).erased())
}
