//! Newtype IDs for type-safe entity references.
//!
//! The backend hands out opaque string identifiers. Wrapping them keeps a
//! category ID from being passed where an education ID is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `as_str()`, `Display`, and `From<String>` / `From<&str>`
///
/// # Example
///
/// ```rust
/// # use portfolio_core::define_id;
/// define_id!(PostId);
/// define_id!(TagId);
///
/// let post = PostId::new("65f1c2");
/// assert_eq!(post.as_str(), "65f1c2");
///
/// // These are different types, so this won't compile:
/// // let _: PostId = TagId::new("65f1c2");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(UserId);
define_id!(CategoryId);
define_id!(ContactId);
define_id!(EducationId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_transparent_on_the_wire() {
        let id: CategoryId = serde_json::from_str("\"cat_01\"").unwrap();
        assert_eq!(id.as_str(), "cat_01");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cat_01\"");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(EducationId::new("edu-9").to_string(), "edu-9");
    }
}
