//! Authenticated user records.
//!
//! DESIGN
//! ======
//! [`Identity`] is what a resolved session holds; its role is already typed.
//! [`IdentityClaim`] is the unvalidated shape handed to `login` by a login form
//! or server response. Role-specific attributes (`department`, `rollNo`,
//! `club`, `position`, ...) ride along in `profile` as opaque JSON; access
//! decisions only ever inspect `role`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::AccessError;
use crate::role::Role;

/// Backends send `"email": null` for accounts without one.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A validated, logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Role-specific attributes, kept verbatim.
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Identity {
    /// Build an identity with an empty profile.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), name: name.into(), email: email.into(), role, avatar: None, profile: Map::new() }
    }

    /// Attach a role-specific attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Read a role-specific attribute as a string.
    #[must_use]
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(Value::as_str)
    }
}

/// An identity whose role has not been checked against the closed role set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaim {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl IdentityClaim {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: None,
            profile: Map::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}

impl TryFrom<IdentityClaim> for Identity {
    type Error = AccessError;

    fn try_from(claim: IdentityClaim) -> Result<Self, Self::Error> {
        let role = claim.role.parse::<Role>()?;
        Ok(Self {
            id: claim.id,
            name: claim.name,
            email: claim.email,
            role,
            avatar: claim.avatar,
            profile: claim.profile,
        })
    }
}

impl From<Identity> for IdentityClaim {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role.as_str().to_owned(),
            avatar: identity.avatar,
            profile: identity.profile,
        }
    }
}
