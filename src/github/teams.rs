//! Standard team roster and permission levels.
//!
//! Every repository provisioned under the organization gets the same set of
//! teams attached, so the roster lives here as static data rather than
//! configuration.

/// Permission level a team holds on a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamPermission {
    /// Full administrative access
    Admin,
    /// Read and write access
    Push,
    /// Read-only access
    Pull,
}

impl TeamPermission {
    /// Convert to the GitHub API string value
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamPermission::Admin => "admin",
            TeamPermission::Push => "push",
            TeamPermission::Pull => "pull",
        }
    }
}

/// A team to attach to provisioned repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    /// GitHub team id (stable, unlike the display name)
    pub id: u64,
    /// Display name, used for logging and error reporting
    pub name: &'static str,
    /// Permission level granted on the repository
    pub permission: TeamPermission,
}

/// The fixed set of teams granted access to every provisioned repository.
#[must_use]
pub fn roster() -> &'static [Team] {
    const ROSTER: &[Team] = &[
        Team {
            id: 234_666,
            name: "Owners-Original",
            permission: TeamPermission::Admin,
        },
        Team {
            id: 2_764_634,
            name: "Infrastructure",
            permission: TeamPermission::Admin,
        },
        Team {
            id: 675_923,
            name: "continuous-integration",
            permission: TeamPermission::Push,
        },
        Team {
            id: 442_273,
            name: "Code Review Team",
            permission: TeamPermission::Push,
        },
        Team {
            id: 242_867,
            name: "Everyone",
            permission: TeamPermission::Pull,
        },
    ];
    ROSTER
}
