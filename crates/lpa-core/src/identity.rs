//! # Identifier Newtypes
//!
//! `ActorUid` identifies a person named on an LPA; `LpaUid` identifies the
//! LPA itself. Keeping them distinct stops an attorney's UID being looked up
//! as an LPA reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LpaError;

const ACTOR_UID_PREFIX: &str = "urn:opg:poas:makeregister:users:";

/// Unique identifier for an actor (donor, attorney, certificate provider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActorUid(pub Uuid);

impl ActorUid {
    /// Generate a new random actor identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether this is the nil UID, i.e. the actor was never assigned one.
    pub fn is_zero(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for ActorUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ACTOR_UID_PREFIX}{}", self.0)
    }
}

/// Reference of a registered LPA, of the form `M-XXXX-XXXX-XXXX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LpaUid(String);

impl LpaUid {
    /// Validate and wrap an LPA reference.
    pub fn parse(s: &str) -> Result<Self, LpaError> {
        let mut groups = s.split('-');
        if groups.next() != Some("M") {
            return Err(LpaError::InvalidUid(s.to_string()));
        }

        let mut count = 0;
        for group in groups {
            count += 1;
            if group.len() != 4
                || !group
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            {
                return Err(LpaError::InvalidUid(s.to_string()));
            }
        }

        if count != 3 {
            return Err(LpaError::InvalidUid(s.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    /// The reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LpaUid {
    type Error = LpaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LpaUid> for String {
    fn from(uid: LpaUid) -> Self {
        uid.0
    }
}

impl std::fmt::Display for LpaUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
