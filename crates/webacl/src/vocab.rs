//! Vocabulary constants for the Web Access Control ontology.
//!
//! Loaders map stored statements onto these IRIs; the authorization model
//! itself only needs [`EVERYONE`] and the access-type predicates.

/// Namespace of the ACL ontology.
pub const ACL_NS: &str = "http://www.w3.org/ns/auth/acl#";

/// Compact prefix conventionally bound to [`ACL_NS`].
pub const ACL_PREFIX: &str = "acl:";

/// Subject identifier meaning "everyone", i.e. public access (`foaf:Agent`).
///
/// This is an ordinary identifier in the same space as WebIDs, so a public
/// grant is distinguishable from a grant with no subject at all.
pub const EVERYONE: &str = "http://xmlns.com/foaf/0.1/Agent";

/// Predicate for a grant on the named resource itself.
pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";

/// Predicate for a grant inherited by the children of a container.
pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";

/// Older spelling of [`DEFAULT`], still found in stored ACLs.
pub const DEFAULT_FOR_NEW: &str = "http://www.w3.org/ns/auth/acl#defaultForNew";

/// Strip the ACL namespace (full or compact form) from `term`.
///
/// Returns the local name, or `None` if `term` is not in the namespace.
///
/// ```
/// use webacl::vocab::acl_local_name;
///
/// assert_eq!(acl_local_name("http://www.w3.org/ns/auth/acl#Read"), Some("Read"));
/// assert_eq!(acl_local_name("acl:default"), Some("default"));
/// assert_eq!(acl_local_name("Read"), None);
/// ```
pub fn acl_local_name(term: &str) -> Option<&str> {
    term.strip_prefix(ACL_NS)
        .or_else(|| term.strip_prefix(ACL_PREFIX))
        .filter(|local| !local.is_empty())
}
