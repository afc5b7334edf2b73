//! Building, naming and merging authorizations from stored statements.

use std::collections::BTreeMap;

use webacl::{AccessType, Authorization, EVERYONE, HashFragment, Mode, vocab};

use crate::common::{AGENT_WEB_ID, CONTAINER_URL, GROUP_WEB_ID, ORIGIN, RESOURCE_URL};

/// One stored `acl:Authorization` node, as a loader would see it.
struct Statement<'a> {
    predicate: &'a str,
    resource: &'a str,
    agent: Option<&'a str>,
    group: Option<&'a str>,
    modes: &'a [&'a str],
    origins: &'a [&'a str],
}

fn load(statement: &Statement<'_>) -> webacl::Result<Authorization> {
    let mut auth =
        Authorization::with_access(statement.resource, AccessType::from_iri(statement.predicate));
    if let Some(agent) = statement.agent {
        auth.set_agent(agent)?;
    }
    if let Some(group) = statement.group {
        auth.set_group(group)?;
    }
    for mode in statement.modes {
        auth.add_mode(mode.parse()?);
    }
    for origin in statement.origins {
        auth.add_origin(*origin);
    }
    Ok(auth)
}

fn load_all(statements: &[Statement<'_>]) -> webacl::Result<BTreeMap<HashFragment, Authorization>> {
    let mut by_fragment: BTreeMap<HashFragment, Authorization> = BTreeMap::new();
    for statement in statements {
        let auth = load(statement)?;
        let fragment = auth.hash_fragment()?;
        match by_fragment.get_mut(&fragment) {
            Some(existing) => {
                existing.merge_with(&auth)?;
            }
            None => {
                by_fragment.insert(fragment, auth);
            }
        }
    }
    Ok(by_fragment)
}

#[test]
fn test_end_to_end_direct_agent_grant() {
    let mut auth = Authorization::with_access(RESOURCE_URL, AccessType::Direct);
    auth.set_agent("A").unwrap().add_modes([Mode::Read, Mode::Write]);

    assert!(auth.is_valid());
    assert!(auth.allows_read());
    assert!(auth.allows_write());
    assert!(auth.allows_append());
    assert!(!auth.allows_control());

    let first = auth.hash_fragment().unwrap();
    let second = auth.hash_fragment().unwrap();
    assert!(!first.as_str().is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_load_statement_with_full_iris() {
    let auth = load(&Statement {
        predicate: vocab::ACCESS_TO,
        resource: RESOURCE_URL,
        agent: Some(AGENT_WEB_ID),
        group: None,
        modes: &[Mode::Read.iri(), Mode::Write.iri()],
        origins: &[ORIGIN],
    })
    .unwrap();

    assert_eq!(auth.access_type(), AccessType::Direct);
    assert_eq!(auth.web_id(), Some(AGENT_WEB_ID));
    assert_eq!(auth.all_modes(), vec![Mode::Read, Mode::Write]);
    assert!(auth.allows_origin(ORIGIN));
    assert!(auth.is_valid());
}

#[test]
fn test_load_public_default_statement() {
    let auth = load(&Statement {
        predicate: "acl:default",
        resource: CONTAINER_URL,
        agent: None,
        group: Some(EVERYONE),
        modes: &["acl:Read"],
        origins: &[],
    })
    .unwrap();

    assert!(auth.is_inherited());
    assert!(auth.is_public());
    assert!(auth.allows_read());
    assert!(!auth.allows_append());
}

#[test]
fn test_load_rejects_statement_with_two_subjects() {
    let result = load(&Statement {
        predicate: vocab::ACCESS_TO,
        resource: RESOURCE_URL,
        agent: Some(AGENT_WEB_ID),
        group: Some(GROUP_WEB_ID),
        modes: &["Read"],
        origins: &[],
    });
    assert!(matches!(result, Err(webacl::Error::SubjectConflict { .. })));
}

#[test]
fn test_load_rejects_unknown_mode() {
    let result = load(&Statement {
        predicate: vocab::ACCESS_TO,
        resource: RESOURCE_URL,
        agent: Some(AGENT_WEB_ID),
        group: None,
        modes: &["acl:Read", "acl:Destroy"],
        origins: &[],
    });
    assert!(matches!(result, Err(webacl::Error::UnknownMode(_))));
}

#[test]
fn test_duplicate_grants_collapse_into_one_entry() {
    let statements = [
        Statement {
            predicate: vocab::ACCESS_TO,
            resource: RESOURCE_URL,
            agent: Some(AGENT_WEB_ID),
            group: None,
            modes: &["Read"],
            origins: &[],
        },
        Statement {
            predicate: vocab::ACCESS_TO,
            resource: RESOURCE_URL,
            agent: Some(AGENT_WEB_ID),
            group: None,
            modes: &["Control"],
            origins: &[ORIGIN],
        },
        Statement {
            predicate: vocab::ACCESS_TO,
            resource: RESOURCE_URL,
            agent: None,
            group: Some(GROUP_WEB_ID),
            modes: &["Append"],
            origins: &[],
        },
    ];

    let loaded = load_all(&statements).unwrap();
    assert_eq!(loaded.len(), 2);

    let agent_fragment = HashFragment::derive(AGENT_WEB_ID, RESOURCE_URL);
    let merged = &loaded[&agent_fragment];
    assert_eq!(merged.all_modes(), vec![Mode::Read, Mode::Control]);
    assert_eq!(merged.all_origins(), vec![ORIGIN]);

    let group_fragment = HashFragment::derive(GROUP_WEB_ID, RESOURCE_URL);
    assert!(loaded[&group_fragment].allows_append());
    assert!(!loaded[&group_fragment].allows_write());
}

#[test]
fn test_loaded_entries_read_back_for_serialization() {
    let auth = load(&Statement {
        predicate: vocab::DEFAULT,
        resource: CONTAINER_URL,
        agent: None,
        group: Some(GROUP_WEB_ID),
        modes: &["Write", "Read"],
        origins: &[],
    })
    .unwrap();

    let predicate = auth.access_type().iri();
    let mode_iris: Vec<&str> = auth.all_modes().iter().map(Mode::iri).collect();

    assert_eq!(predicate, vocab::DEFAULT);
    assert_eq!(
        mode_iris,
        vec![
            "http://www.w3.org/ns/auth/acl#Read",
            "http://www.w3.org/ns/auth/acl#Write"
        ]
    );
}
