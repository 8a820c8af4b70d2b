//! Reconstructs a repository's "Manage access" view for a single team.
//!
//! The team-level repository listing includes repositories the team only
//! reaches through a parent team or the org's base permission, and reports
//! the effective level rather than the granted one. The repository-level team
//! listing only contains direct grants, so each candidate repository is
//! checked there.

use crate::{GitHubApi, RepoPermission, Result, Session, Team};

/// Explicit grants held by `team`, in the order GitHub lists its repositories.
pub async fn load_direct_team_repo_access<A: GitHubApi>(
    session: &Session<A>,
    team: &Team,
) -> Result<Vec<RepoPermission>> {
    let accessible_repos = session
        .api()
        .list_team_repos(session.org(), &team.slug)
        .await?;

    println!(
        "{} has access to {} repos, filtering to explicitly set permissions..",
        team.slug,
        accessible_repos.len()
    );

    let mut assignments = vec![];
    for repo in accessible_repos {
        match explicit_assignment(session, team, &repo.name).await? {
            Some(permission) => assignments.push(RepoPermission::new(repo.name, permission)),
            None => log::debug!("{} reaches {} only indirectly", team.slug, repo.name),
        }
    }

    print_assignments(team, &assignments);

    Ok(assignments)
}

/// The level granted directly to `team` on `repo`, if any.
async fn explicit_assignment<A: GitHubApi>(
    session: &Session<A>,
    team: &Team,
    repo: &str,
) -> Result<Option<String>> {
    let teams_for_repo = session.api().list_repo_teams(session.org(), repo).await?;
    Ok(teams_for_repo
        .into_iter()
        .find(|entry| entry.slug == team.slug)
        .map(|entry| entry.permission))
}

fn print_assignments(team: &Team, assignments: &[RepoPermission]) {
    if assignments.is_empty() {
        println!("No explicit permissions are set for {}", team.slug);
        return;
    }
    println!("The following explicit permissions are set for {}:", team.slug);
    for assignment in assignments {
        println!(" - {}: {}", assignment.repo, assignment.permission);
    }
}
