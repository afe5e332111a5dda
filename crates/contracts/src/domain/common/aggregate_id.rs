use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a remote entity (template, template version, user).
///
/// Ids travel as strings in URLs and query parameters, so every id type
/// must round-trip through its string form.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a `Uuid` newtype id with the usual conversions.
#[macro_export]
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    uuid_id!(
        /// Test-only id
        SampleId
    );

    #[test]
    fn test_round_trip_through_string() {
        let id = SampleId::new_v4();
        assert_eq!(SampleId::from_string(&id.as_string()), Ok(id));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(SampleId::from_string("not-a-uuid").is_err());
    }
}
