//! Error types for webacl

use std::fmt;

use thiserror::Error;

use crate::fragment::HashFragment;

/// Result type alias for webacl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which subject slot of an authorization a setter touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    /// An individual agent (`acl:agent`).
    Agent,
    /// A group of agents (`acl:agentGroup`).
    Group,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Agent => f.write_str("agent"),
            SubjectKind::Group => f.write_str("group"),
        }
    }
}

/// Errors that can occur in webacl
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A subject was assigned while the other subject slot is already filled.
    #[error("Subject conflict: cannot set {requested} while {existing} is already set")]
    SubjectConflict {
        /// The slot that is already set
        existing: SubjectKind,
        /// The slot the caller tried to set
        requested: SubjectKind,
    },

    /// The hash fragment needs both a subject and a resource.
    #[error("Missing identity: cannot derive a hash fragment without {missing}")]
    MissingIdentity {
        /// Human-readable list of the absent fields
        missing: &'static str,
    },

    /// Two authorizations naming different grants were merged.
    #[error("Merge mismatch: {ours} and {theirs} name different grants")]
    MergeMismatch {
        /// Fragment of the receiving authorization
        ours: HashFragment,
        /// Fragment of the authorization being merged in
        theirs: HashFragment,
    },

    /// A string did not name any access mode.
    #[error("Unknown access mode: {0}")]
    UnknownMode(String),
}

impl Error {
    /// Whether this error comes from misusing an authorization (as opposed
    /// to bad input data handed to a parser).
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::SubjectConflict { .. } => true,
            Error::MissingIdentity { .. } => true,
            Error::MergeMismatch { .. } => true,
            Error::UnknownMode(_) => false,
        }
    }

    pub(crate) fn subject_conflict(existing: SubjectKind, requested: SubjectKind) -> Self {
        Error::SubjectConflict {
            existing,
            requested,
        }
    }
}
