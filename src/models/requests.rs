use serde::{Deserialize, Serialize};

/// Incoming profile before presence validation
///
/// Every field is optional so the validator can report the first missing one
/// instead of failing deserialization of the whole request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub instruments: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Request to score the compatibility of two musicians
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(default)]
    pub user1: Option<ProfileInput>,
    #[serde(default)]
    pub user2: Option<ProfileInput>,
}
