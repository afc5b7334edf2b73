//! Direct versus inherited access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocab;

/// Whether a grant applies to the named resource or is inherited by the
/// resources inside a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// `acl:accessTo`: the resource itself.
    #[default]
    Direct,
    /// `acl:default`: the children of a container.
    Inherited,
}

impl AccessType {
    /// Predicate IRI a loader stores for this access type.
    pub fn iri(&self) -> &'static str {
        match self {
            Self::Direct => vocab::ACCESS_TO,
            Self::Inherited => vocab::DEFAULT,
        }
    }

    /// Map a stored predicate onto an access type.
    ///
    /// Only the inherited marker (`acl:default`, or the legacy
    /// `acl:defaultForNew`, full or compact) yields [`AccessType::Inherited`];
    /// anything else is [`AccessType::Direct`].
    ///
    /// ```
    /// use webacl::AccessType;
    ///
    /// assert_eq!(AccessType::from_iri("acl:default"), AccessType::Inherited);
    /// assert_eq!(AccessType::from_iri("acl:accessTo"), AccessType::Direct);
    /// assert_eq!(AccessType::from_iri("nonsense"), AccessType::Direct);
    /// ```
    pub fn from_iri(term: &str) -> Self {
        match vocab::acl_local_name(term) {
            Some("default" | "defaultForNew") => Self::Inherited,
            _ => Self::Direct,
        }
    }

    /// Whether this is [`AccessType::Inherited`].
    pub fn is_inherited(&self) -> bool {
        matches!(self, Self::Inherited)
    }
}

impl From<bool> for AccessType {
    /// `true` is the inherit flag.
    fn from(inherit: bool) -> Self {
        if inherit { Self::Inherited } else { Self::Direct }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri())
    }
}
