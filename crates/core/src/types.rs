use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Defines an order-preserving `String -> String` newtype with the shared map API.
///
/// Iteration follows insertion order, which for a loaded template is the key
/// order of the parameters file. Rendering is therefore stable across runs.
macro_rules! string_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(IndexMap<String, String>);

        impl $name {
            /// Create a new empty mapping
            #[must_use]
            pub fn new() -> Self {
                Self(IndexMap::new())
            }

            /// Create an empty mapping with room for `capacity` entries
            #[must_use]
            pub fn with_capacity(capacity: usize) -> Self {
                Self(IndexMap::with_capacity(capacity))
            }

            /// Insert an entry, returning the previous value if any
            pub fn insert(
                &mut self,
                key: impl Into<String>,
                value: impl Into<String>,
            ) -> Option<String> {
                self.0.insert(key.into(), value.into())
            }

            /// Get a value by key
            #[must_use]
            pub fn get(&self, key: &str) -> Option<&String> {
                self.0.get(key)
            }

            /// Get the number of entries
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Check if there are no entries
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterate over entries in insertion order
            pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
                self.0.iter()
            }

            /// Iterate over keys in insertion order
            pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
                self.0.keys()
            }
        }

        impl Deref for $name {
            type Target = IndexMap<String, String>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self(
                    iter.into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                )
            }
        }

        impl IntoIterator for $name {
            type Item = (String, String);
            type IntoIter = indexmap::map::IntoIter<String, String>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a String, &'a String);
            type IntoIter = indexmap::map::Iter<'a, String, String>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

string_map!(
    /// Output variable name to raw template string, as loaded from the parameters file
    TemplateMapping
);

string_map!(
    /// Placeholder identifier to literal replacement value, built from `name=value` tokens
    SubstitutionParameters
);

string_map!(
    /// Output variable name to fully substituted parameter store key
    LookupKeys
);

string_map!(
    /// Output variable name to the value returned by the parameter store
    EnvironmentVariables
);

impl EnvironmentVariables {
    /// Render as `NAME=VALUE` lines joined by `\n`, without a trailing newline
    #[must_use]
    pub fn to_env_file(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
