//! Domain models for the Castlabs client.
//!
//! This module groups the connection aggregate and the request/response
//! payloads exchanged with the Castlabs REST endpoints.

mod castlabs_connection;
mod ingest_keys;
mod merchant_config;
mod sub_merchant;

pub use castlabs_connection::{
    CastlabsConnection, DEFAULT_AUTH_BASE_URL, DEFAULT_INGESTION_BASE_URL,
};
pub use ingest_keys::{
    IngestAsset, IngestAssetsResponse, IngestKey, IngestKeysRequest, IngestedAsset, IngestedKey,
};
pub use merchant_config::{FairplayRequest, SharedSecretRequest, UpdateAuthorizationSettingsRequest};
pub use sub_merchant::{
    AddSubMerchantAccountRequest, AddSubMerchantAccountResponse, LinkAccountToSubMerchantRequest,
};
