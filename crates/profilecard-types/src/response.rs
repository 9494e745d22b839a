use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;
use crate::profile::UserProfile;

/// Envelope of a random-user API response.
///
/// `results` stays as raw JSON so an empty list, a missing list and a
/// malformed first record can be told apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomUserResponse {
    #[serde(default)]
    pub results: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ResponseInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub version: Option<String>,
}

impl RandomUserResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        serde_json::from_slice(body).map_err(|e| FetchError::InvalidBody(e.to_string()))
    }

    /// Decode the first record. Later records are ignored.
    pub fn into_first_profile(self) -> Result<UserProfile, FetchError> {
        if let Some(message) = self.error {
            return Err(FetchError::Api(message));
        }

        let first = self
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(FetchError::EmptyResults)?;

        serde_json::from_value(first).map_err(|e| FetchError::MalformedRecord(e.to_string()))
    }
}

/// Body bytes to profile, the whole decode path of a fetch.
pub fn decode_first_profile(body: &[u8]) -> Result<UserProfile, FetchError> {
    RandomUserResponse::from_slice(body)?.into_first_profile()
}
