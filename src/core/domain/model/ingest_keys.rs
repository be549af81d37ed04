//! Payloads for the key ingestion endpoint.
//!
//! Ingestion registers encryption keys with the Castlabs keystore so that
//! DRM license servers can hand them out later. One request may carry
//! keys for several assets, and each asset may carry several keys.

use serde::{Deserialize, Serialize};

/// Request payload for ingesting one or more encryption keys.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestKeysRequest {
    /// The assets whose keys are being registered.
    pub assets: Vec<IngestAsset>,
}

/// A single asset and the keys to register for it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestAsset {
    /// Asset classification understood by the keystore (e.g. `CENC`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Opaque asset identifier chosen by the merchant.
    pub asset_id: String,
    /// Variant distinguishing key sets of one asset (e.g. `HD`, `SD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// The keys to ingest for this asset.
    pub ingest_keys: Vec<IngestKey>,
}

/// A single encryption key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestKey {
    /// Base64-encoded key identifier.
    pub key_id: String,
    /// Base64-encoded key material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Base64-encoded initialization vector, where the DRM system uses one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
    /// Encryption algorithm, e.g. `AES`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Stream types the key protects, e.g. `VIDEO_AUDIO`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_type: Option<String>,
}

/// Response payload returned by the key ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestAssetsResponse {
    /// Ingestion outcome per submitted asset.
    #[serde(default)]
    pub assets: Vec<IngestedAsset>,
}

/// Ingestion outcome for one asset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedAsset {
    /// The asset identifier the keys were stored under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// The variant the keys were stored under, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// The keys that were registered for this asset.
    #[serde(default)]
    pub keys: Vec<IngestedKey>,
}

/// A key as stored by the keystore.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedKey {
    /// Base64-encoded key identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    /// Identifier of the key-rotation slot, for rotating assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_rotation_id: Option<String>,
    /// DRM system identifiers the key is available for.
    #[serde(default)]
    pub system_ids: Vec<String>,
}
