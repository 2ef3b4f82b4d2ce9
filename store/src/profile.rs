// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt::{self, Display};

/// Reference to a user profile, either the internal id or the external
/// Amazon auth id a signed-in session carries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ProfileRef {
    Id(i32),
    AuthId(String),
}

impl ProfileRef {
    pub fn id(id: i32) -> Self {
        Self::Id(id)
    }

    pub fn auth_id(auth_id: &str) -> Self {
        Self::AuthId(auth_id.into())
    }

    /// Build from whatever parts a request carried; the internal id wins
    /// when both are present.
    pub fn from_parts(id: Option<i32>, auth_id: Option<&str>) -> Option<Self> {
        match (id, auth_id) {
            (Some(id), _) => Some(Self::Id(id)),
            (None, Some(auth_id)) => Some(Self::AuthId(auth_id.into())),
            (None, None) => None,
        }
    }
}

impl Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileRef::Id(id) => write!(f, "id({})", id),
            ProfileRef::AuthId(auth_id) => write!(f, "auth_id({})", auth_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_takes_precedence() {
        let profile = ProfileRef::from_parts(Some(3), Some("amz1.account.ABC"));
        assert_eq!(profile, Some(ProfileRef::Id(3)));
    }

    #[test]
    fn auth_id_when_no_id() {
        let profile = ProfileRef::from_parts(None, Some("amz1.account.ABC"));
        assert_eq!(profile, Some(ProfileRef::auth_id("amz1.account.ABC")));
    }

    #[test]
    fn nothing_from_no_parts() {
        assert_eq!(ProfileRef::from_parts(None, None), None);
    }

    #[test]
    fn display() {
        assert_eq!(ProfileRef::id(42).to_string(), "id(42)");
        assert_eq!(ProfileRef::auth_id("abc").to_string(), "auth_id(abc)");
    }
}
