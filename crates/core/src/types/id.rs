//! Newtype IDs for type-safe record references.
//!
//! Use the `define_record_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different record kinds.

/// Macro to define a type-safe record ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` producing a fresh prefixed UUID id (e.g. `item_<uuid>`)
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// Generated ids carry a per-kind prefix so a raw id string in a log line
/// is still attributable. Ids read back from storage are accepted verbatim:
/// the remote table backing mints unprefixed row ids.
///
/// # Example
///
/// ```rust
/// # use delights_core::define_record_id;
/// define_record_id!(WidgetId, "wid");
///
/// let id = WidgetId::generate();
/// assert!(id.as_str().starts_with("wid_"));
/// ```
#[macro_export]
macro_rules! define_record_id {
    ($name:ident, $prefix:literal) => {
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
            /// Generate a fresh unique ID with this record kind's prefix.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "_{}"), ::uuid::Uuid::new_v4()))
            }

            /// Wrap an existing ID value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
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

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Define the ids for the three record kinds
define_record_id!(MenuItemId, "item");
define_record_id!(OrderId, "ord");
define_record_id!(MessageId, "msg");
