//! # webacl
//!
//! WebID-ACL authorization entries.
//!
//! An [`Authorization`] grants one subject (an agent, a group, or
//! [`EVERYONE`](vocab::EVERYONE)) a set of [`Mode`]s over one resource or
//! container. This crate holds the entry model and its local rules only;
//! reading and writing ACL documents and deciding requests across many
//! entries belong to the crates that embed it.
//!
//! # Modules
//!
//! - [`authorization`]: the entry type
//! - [`mode`]: access modes and Write ⇒ Append
//! - [`access`]: direct versus inherited grants
//! - [`fragment`]: stable grant names
//! - [`vocab`]: ACL vocabulary constants
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![warn(clippy::all)]

pub mod access;
pub mod authorization;
pub mod error;
pub mod fragment;
pub mod mode;
pub mod vocab;

mod proptests;

pub use access::AccessType;
pub use authorization::Authorization;
pub use error::{Error, Result, SubjectKind};
pub use fragment::HashFragment;
pub use mode::Mode;
pub use vocab::EVERYONE;
