//! Access modes and the implication between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::vocab;

// ============================================================================
// Mode enum
// ============================================================================

/// One access capability an authorization can grant.
///
/// The derived ordering (declaration order) is the order in which
/// [`Authorization::all_modes`](crate::Authorization::all_modes) lists modes.
///
/// # Example
///
/// ```rust
/// use webacl::Mode;
///
/// assert!(Mode::Write.implies(Mode::Append));
/// assert!(!Mode::Append.implies(Mode::Write));
/// assert_eq!(Mode::Read.iri(), "http://www.w3.org/ns/auth/acl#Read");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Read the resource or list the container.
    Read,
    /// Modify or delete the resource (implies [`Mode::Append`]).
    Write,
    /// Add data to the resource without removing any.
    Append,
    /// Read and write the ACL itself.
    Control,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Read, Mode::Write, Mode::Append, Mode::Control];

    /// Local name within the ACL namespace.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Append => "Append",
            Self::Control => "Control",
        }
    }

    /// Full IRI of this mode.
    pub fn iri(&self) -> &'static str {
        match self {
            Self::Read => "http://www.w3.org/ns/auth/acl#Read",
            Self::Write => "http://www.w3.org/ns/auth/acl#Write",
            Self::Append => "http://www.w3.org/ns/auth/acl#Append",
            Self::Control => "http://www.w3.org/ns/auth/acl#Control",
        }
    }

    /// Whether holding `self` also grants `other`.
    ///
    /// Every mode implies itself; additionally Write implies Append.
    pub fn implies(self, other: Mode) -> bool {
        self == other || matches!((self, other), (Mode::Write, Mode::Append))
    }

    fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Accepts `Read`, `acl:Read` or the full IRI.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let local = vocab::acl_local_name(s).unwrap_or(s);
        Self::from_local_name(local).ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}
