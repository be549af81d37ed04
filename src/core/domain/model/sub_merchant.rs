//! Payloads for the reseller sub-merchant endpoints.

use serde::{Deserialize, Serialize};

/// Request payload for creating a sub-merchant account under a reseller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSubMerchantAccountRequest {
    /// Display name of the new sub-merchant account.
    pub name: String,
}

/// Response payload for a sub-merchant account creation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSubMerchantAccountResponse {
    /// UUID assigned to the new sub-merchant.
    ///
    /// A readable response without this field is still unusable and is
    /// reported as a rejection together with the raw body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_merchant_uuid: Option<String>,
}

/// Request payload for linking an existing API account to a sub-merchant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAccountToSubMerchantRequest {
    /// Login of the API account to link.
    pub login: String,
    /// UUID of the sub-merchant the account is granted access to.
    pub sub_merchant_uuid: String,
}
