//! Tests for the standard team roster.

use repo_bootstrap::{TeamPermission, roster};

#[test]
fn test_team_permission_as_str() {
    assert_eq!(TeamPermission::Admin.as_str(), "admin");
    assert_eq!(TeamPermission::Push.as_str(), "push");
    assert_eq!(TeamPermission::Pull.as_str(), "pull");
}

#[test]
fn test_enum_copy() {
    // Verify the permission enum is Copy
    let permission = TeamPermission::Push;
    let _copy = permission;
    let _original = permission; // Should still be usable
}

#[test]
fn test_roster_contents() {
    let teams = roster();
    assert_eq!(teams.len(), 5);

    let by_name = |name: &str| {
        teams
            .iter()
            .find(|team| team.name == name)
            .unwrap_or_else(|| panic!("missing team {name}"))
    };

    assert_eq!(by_name("Owners-Original").permission, TeamPermission::Admin);
    assert_eq!(by_name("Infrastructure").permission, TeamPermission::Admin);
    assert_eq!(
        by_name("continuous-integration").permission,
        TeamPermission::Push
    );
    assert_eq!(by_name("Code Review Team").permission, TeamPermission::Push);
    assert_eq!(by_name("Everyone").permission, TeamPermission::Pull);
}

#[test]
fn test_roster_ids_are_unique() {
    let teams = roster();
    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate team id {}", a.id);
        }
    }
}
