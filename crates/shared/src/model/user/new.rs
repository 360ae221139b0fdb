use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use exemplar::Model;

use crate::{
    api::{error::ValidationError, payloads::NewUserRequest},
    model::{
        constants::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH},
        ValidateModel,
    },
    types::Uuid,
};

/// A validated user ready to be inserted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
pub struct NewUser {
    pub id: Uuid,
    pub username: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

impl ValidateModel for NewUserRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let length = self.username.as_deref().map_or(0, |v| v.chars().count());
        if length < USERNAME_MIN_LENGTH {
            Err(ValidationError::new("Path `username` is required."))
        } else if length > USERNAME_MAX_LENGTH {
            Err(ValidationError::new("username too long"))
        } else {
            Ok(())
        }
    }
}

impl TryFrom<NewUserRequest> for NewUser {
    type Error = ValidationError;

    fn try_from(req: NewUserRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        Ok(NewUser::new(req.username.unwrap_or_default()))
    }
}
