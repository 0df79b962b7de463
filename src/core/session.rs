//! Signed-in viewer and role gates

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn can_upload(self) -> bool {
        match self {
            Self::Admin => true,
            Self::User => false,
        }
    }

    pub fn can_comment(self) -> bool {
        match self {
            Self::Admin | Self::User => true,
        }
    }
}

/// The active authenticated viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserSession {
    pub fn can_upload(&self) -> bool {
        self.role.can_upload()
    }

    pub fn can_comment(&self) -> bool {
        self.role.can_comment()
    }
}
