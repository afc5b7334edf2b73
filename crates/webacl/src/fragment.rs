//! Stable identifiers for naming a grant inside an ACL document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digest bytes kept in a fragment (rendered as twice as many
/// hex characters).
const FRAGMENT_BYTES: usize = 8;

/// Short deterministic identifier for one subject/resource grant.
///
/// Produced by [`Authorization::hash_fragment`](crate::Authorization::hash_fragment).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HashFragment(String);

impl HashFragment {
    /// Derive the fragment for `web_id` granted access to `resource_url`.
    ///
    /// The two inputs are separated by a NUL byte before hashing so that
    /// shifting characters between them changes the result.
    ///
    /// ```
    /// use webacl::HashFragment;
    ///
    /// let a = HashFragment::derive("https://bob.example/card#me", "https://bob.example/doc");
    /// let b = HashFragment::derive("https://bob.example/card#me", "https://bob.example/doc");
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str().len(), 16);
    /// ```
    pub fn derive(web_id: &str, resource_url: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(web_id.as_bytes());
        hasher.update(&[0]);
        hasher.update(resource_url.as_bytes());
        let digest = hasher.finalize();
        let hex = digest.to_hex();
        let fragment = Self(hex.as_str()[..FRAGMENT_BYTES * 2].to_string());
        log::trace!("Derived fragment {fragment} for <{web_id}> on <{resource_url}>");
        fragment
    }

    /// Returns the fragment as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HashFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HashFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HashFragment> for String {
    fn from(fragment: HashFragment) -> Self {
        fragment.0
    }
}
