//! A single WebID-ACL authorization: one subject, a set of access modes,
//! one resource.
//!
//! An [`Authorization`] is built up by a loader or policy builder through
//! its mutators and then read back by whatever persists or evaluates it.
//! The rules enforced here are local to one entry:
//!
//! - an entry names either an agent or a group, never both;
//! - Write implies Append when answering mode queries, while
//!   [`Authorization::all_modes`] only reports explicit grants;
//! - an entry can be named by a [`HashFragment`] once its subject and
//!   resource are known.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::access::AccessType;
use crate::error::{Error, Result, SubjectKind};
use crate::fragment::HashFragment;
use crate::mode::Mode;
use crate::vocab::EVERYONE;

/// One grant of access modes to a subject over a resource or container.
///
/// # Example
///
/// ```rust
/// use webacl::{AccessType, Authorization, Mode};
///
/// # fn main() -> webacl::Result<()> {
/// let mut auth = Authorization::for_resource("https://bob.example/docs/file1");
/// auth.set_agent("https://bob.example/profile/card#me")?
///     .add_modes([Mode::Read, Mode::Write]);
///
/// assert!(auth.is_valid());
/// assert!(auth.allows_append(), "Write implies Append");
/// assert_eq!(auth.all_modes(), vec![Mode::Read, Mode::Write]);
/// assert_eq!(auth.access_type(), AccessType::Direct);
/// assert_eq!(auth.hash_fragment()?, auth.hash_fragment()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AuthorizationRecord")]
pub struct Authorization {
    resource_url: Option<String>,
    access_type: AccessType,
    agent: Option<String>,
    group: Option<String>,
    modes: BTreeSet<Mode>,
    origins: BTreeSet<String>,
    mail_to: Vec<String>,
}

/// `Some` only for a present, non-empty identifier.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// An empty identifier is stored as absent.
fn present(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

impl Authorization {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Creates an empty authorization with no resource and direct access.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty authorization for `resource_url` with direct access.
    pub fn for_resource(resource_url: impl Into<String>) -> Self {
        Self::with_access(resource_url, AccessType::Direct)
    }

    /// Creates an empty authorization for `resource_url` with the given
    /// access type.
    pub fn with_access(resource_url: impl Into<String>, access_type: AccessType) -> Self {
        Self {
            resource_url: present(resource_url.into()),
            access_type,
            ..Self::default()
        }
    }

    /// Sets the resource or container this grant applies to.
    pub fn set_resource_url(&mut self, resource_url: impl Into<String>) -> &mut Self {
        self.resource_url = present(resource_url.into());
        self
    }

    /// Sets whether this grant is direct or inherited.
    pub fn set_access_type(&mut self, access_type: AccessType) -> &mut Self {
        self.access_type = access_type;
        self
    }

    // ------------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------------

    /// The resource or container this grant applies to.
    pub fn resource_url(&self) -> Option<&str> {
        non_empty(&self.resource_url)
    }

    /// Direct or inherited access.
    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    /// The agent WebID, if this is an agent grant.
    pub fn agent(&self) -> Option<&str> {
        non_empty(&self.agent)
    }

    /// The group WebID, if this is a group grant.
    pub fn group(&self) -> Option<&str> {
        non_empty(&self.group)
    }

    /// Notification addresses, in insertion order.
    pub fn mail_to(&self) -> &[String] {
        &self.mail_to
    }

    // ------------------------------------------------------------------------
    // Subject
    // ------------------------------------------------------------------------

    /// Grants to an individual agent (or to [`EVERYONE`]).
    ///
    /// Fails with [`Error::SubjectConflict`] if a group is already set; call
    /// [`Authorization::clear_subject`] first to reassign.
    pub fn set_agent(&mut self, web_id: impl Into<String>) -> Result<&mut Self> {
        if self.is_group() {
            log::debug!("Refusing to set agent on a group authorization");
            return Err(Error::subject_conflict(SubjectKind::Group, SubjectKind::Agent));
        }
        self.agent = present(web_id.into());
        Ok(self)
    }

    /// Grants to a group (or to [`EVERYONE`]).
    ///
    /// Fails with [`Error::SubjectConflict`] if an agent is already set.
    pub fn set_group(&mut self, web_id: impl Into<String>) -> Result<&mut Self> {
        if self.is_agent() {
            log::debug!("Refusing to set group on an agent authorization");
            return Err(Error::subject_conflict(SubjectKind::Agent, SubjectKind::Group));
        }
        self.group = present(web_id.into());
        Ok(self)
    }

    /// Grants to everyone, i.e. `set_group(EVERYONE)`.
    pub fn set_public(&mut self) -> Result<&mut Self> {
        self.set_group(EVERYONE)
    }

    /// Unsets both the agent and the group.
    pub fn clear_subject(&mut self) -> &mut Self {
        self.agent = None;
        self.group = None;
        self
    }

    /// Whether an agent is set.
    pub fn is_agent(&self) -> bool {
        self.agent().is_some()
    }

    /// Whether a group is set.
    pub fn is_group(&self) -> bool {
        self.group().is_some()
    }

    /// Whether the subject is [`EVERYONE`], through either slot.
    pub fn is_public(&self) -> bool {
        self.agent() == Some(EVERYONE) || self.group() == Some(EVERYONE)
    }

    /// The subject identifier: the agent if set, otherwise the group.
    pub fn web_id(&self) -> Option<&str> {
        self.agent().or_else(|| self.group())
    }

    // ------------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------------

    /// Grants `mode`. Adding a mode twice is a no-op.
    pub fn add_mode(&mut self, mode: Mode) -> &mut Self {
        self.modes.insert(mode);
        self
    }

    /// Grants every mode in `modes`.
    pub fn add_modes(&mut self, modes: impl IntoIterator<Item = Mode>) -> &mut Self {
        self.modes.extend(modes);
        self
    }

    /// Revokes an explicitly granted `mode`; a no-op if it was not granted.
    ///
    /// Modes granted only by implication are unaffected: removing Append
    /// while Write is held leaves [`Authorization::allows_append`] true.
    pub fn remove_mode(&mut self, mode: Mode) -> &mut Self {
        self.modes.remove(&mode);
        self
    }

    /// Revokes every mode in `modes`.
    pub fn remove_modes(&mut self, modes: impl IntoIterator<Item = Mode>) -> &mut Self {
        for mode in modes {
            self.modes.remove(&mode);
        }
        self
    }

    /// Whether `mode` is granted explicitly or by implication.
    pub fn allows_mode(&self, mode: Mode) -> bool {
        self.modes.iter().any(|held| held.implies(mode))
    }

    /// Whether Read is granted.
    pub fn allows_read(&self) -> bool {
        self.allows_mode(Mode::Read)
    }

    /// Whether Write is granted.
    pub fn allows_write(&self) -> bool {
        self.allows_mode(Mode::Write)
    }

    /// Whether Append is granted, explicitly or through Write.
    pub fn allows_append(&self) -> bool {
        self.allows_mode(Mode::Append)
    }

    /// Whether Control is granted.
    pub fn allows_control(&self) -> bool {
        self.allows_mode(Mode::Control)
    }

    /// The explicitly granted modes, without implied ones.
    pub fn all_modes(&self) -> Vec<Mode> {
        self.modes.iter().copied().collect()
    }

    // ------------------------------------------------------------------------
    // Origins
    // ------------------------------------------------------------------------

    /// Restricts the grant to requests from `origin` (among others).
    pub fn add_origin(&mut self, origin: impl Into<String>) -> &mut Self {
        self.origins.insert(origin.into());
        self
    }

    /// Drops `origin` from the trusted set; a no-op if absent.
    pub fn remove_origin(&mut self, origin: &str) -> &mut Self {
        self.origins.remove(origin);
        self
    }

    /// Trusted origins, sorted. Empty means no origin restriction.
    pub fn all_origins(&self) -> Vec<&str> {
        self.origins.iter().map(String::as_str).collect()
    }

    /// Whether `origin` is in the trusted set.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    // ------------------------------------------------------------------------
    // Notification
    // ------------------------------------------------------------------------

    /// Appends a notification address. Duplicates are kept.
    pub fn add_mail_to(&mut self, address: impl Into<String>) -> &mut Self {
        self.mail_to.push(address.into());
        self
    }

    // ------------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------------

    /// Whether this grant is inherited by the children of a container.
    pub fn is_inherited(&self) -> bool {
        self.access_type.is_inherited()
    }

    /// Whether nothing has been granted yet.
    ///
    /// The resource and access type are construction inputs and do not
    /// count as grant content.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
            && !self.is_agent()
            && !self.is_group()
            && !self.is_public()
            && self.origins.is_empty()
            && self.mail_to.is_empty()
    }

    /// Whether the entry has a resource, a subject and at least one mode.
    pub fn is_valid(&self) -> bool {
        self.resource_url().is_some() && self.web_id().is_some() && !self.modes.is_empty()
    }

    /// Derives the stable name of this grant from its subject and resource.
    ///
    /// Fails with [`Error::MissingIdentity`] unless both are set.
    pub fn hash_fragment(&self) -> Result<HashFragment> {
        match (self.web_id(), self.resource_url()) {
            (Some(web_id), Some(resource_url)) => Ok(HashFragment::derive(web_id, resource_url)),
            (None, None) => Err(Error::MissingIdentity {
                missing: "a subject or a resource url",
            }),
            (None, Some(_)) => Err(Error::MissingIdentity {
                missing: "a subject",
            }),
            (Some(_), None) => Err(Error::MissingIdentity {
                missing: "a resource url",
            }),
        }
    }

    /// Folds the modes and origins of `other` into this authorization.
    ///
    /// Both entries must name the same grant, i.e. have equal hash
    /// fragments; otherwise [`Error::MergeMismatch`] is returned and `self`
    /// is left untouched.
    pub fn merge_with(&mut self, other: &Authorization) -> Result<&mut Self> {
        let ours = self.hash_fragment()?;
        let theirs = other.hash_fragment()?;
        if ours != theirs {
            return Err(Error::MergeMismatch { ours, theirs });
        }
        log::debug!(
            "Merging {} mode(s) and {} origin(s) into authorization {ours}",
            other.modes.len(),
            other.origins.len()
        );
        self.modes.extend(other.modes.iter().copied());
        self.origins.extend(other.origins.iter().cloned());
        Ok(self)
    }
}

// ============================================================================
// Deserialization
// ============================================================================

/// Wire shape of an [`Authorization`], checked through the guarded setters.
#[derive(Default, Deserialize)]
#[serde(default)]
struct AuthorizationRecord {
    resource_url: Option<String>,
    access_type: AccessType,
    agent: Option<String>,
    group: Option<String>,
    modes: Vec<Mode>,
    origins: Vec<String>,
    mail_to: Vec<String>,
}

impl TryFrom<AuthorizationRecord> for Authorization {
    type Error = Error;

    fn try_from(record: AuthorizationRecord) -> Result<Self> {
        let mut auth = Authorization::new();
        auth.access_type = record.access_type;
        auth.resource_url = record.resource_url.and_then(present);
        if let Some(agent) = record.agent.and_then(present) {
            auth.set_agent(agent)?;
        }
        if let Some(group) = record.group.and_then(present) {
            auth.set_group(group)?;
        }
        auth.add_modes(record.modes);
        for origin in record.origins {
            auth.add_origin(origin);
        }
        auth.mail_to = record.mail_to;
        Ok(auth)
    }
}
