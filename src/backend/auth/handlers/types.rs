/**
 * Session Handler Types
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::models::is_valid_email;

/// Body of `POST /jwt`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TokenRequest {
    /// Identity claim to embed in the token
    pub email: String,
}

impl TokenRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(SharedError::validation("email", "must be a valid email address"))
        }
    }
}

/// Response of the session endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub success: bool,
}
