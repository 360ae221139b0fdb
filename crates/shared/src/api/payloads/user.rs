use serde::{Deserialize, Serialize};

use super::lenient_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

impl NewUserRequest {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self { username: Some(username.into()) }
    }
}
