//! Copy explicit per-repository team permissions from one GitHub organization
//! team to another.
//!
//! The run is a straight pipeline: [`Session::initialize`] checks the caller is
//! an org admin, [`teams`] resolves both teams, [`audit`] finds the repos where
//! the source team has an explicit grant, and [`replicate`] applies the same
//! grants to the target team once the operator agrees.

pub mod audit;
pub mod error;
pub mod github;
pub mod replicate;
pub mod session;
pub mod teams;

pub use error::{Error, Result};
pub use github::{GitHubApi, OctocrabClient};
pub use replicate::{Confirm, ConsoleConfirm};
pub use session::{Config, Session};

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Membership {
    pub role: String,
}

/// A team as listed by the organization.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub slug: String,
    pub name: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub name: String,
}

/// A team entry from a repository's own team listing. `permission` is the
/// level granted directly on that repository.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoTeam {
    pub slug: String,
    pub permission: String,
}

/// An explicit grant of `permission` on `repo`, copied verbatim between teams.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoPermission {
    pub repo: String,
    pub permission: String,
}

impl RepoPermission {
    pub fn new(repo: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            permission: permission.into(),
        }
    }
}

/// Runs every stage after session setup: resolves both teams, audits the
/// source team's explicit grants, asks `confirm` and replicates the grants
/// onto the target team.
///
/// Returns the grants that were copied. The operator is asked even when the
/// source team has no explicit grants.
pub async fn clone_team_permissions<A, C>(
    session: &Session<A>,
    from_team: &str,
    to_team: &str,
    confirm: &mut C,
) -> Result<Vec<RepoPermission>>
where
    A: GitHubApi,
    C: Confirm + ?Sized,
{
    let all_teams = teams::load_all_teams(session).await?;
    let from_team = teams::validate_team(&all_teams, from_team)?;
    let to_team = teams::validate_team(&all_teams, to_team)?;

    let direct_repo_roles = audit::load_direct_team_repo_access(session, from_team).await?;
    replicate::confirm_copy(confirm, to_team)?;
    replicate::grant_access_to_team(session, to_team, &direct_repo_roles).await?;

    println!("\nDone!");

    Ok(direct_repo_roles)
}
