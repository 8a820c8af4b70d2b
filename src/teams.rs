use crate::{Error, GitHubApi, Result, Session, Team};

/// Every team in the session's organization.
pub async fn load_all_teams<A: GitHubApi>(session: &Session<A>) -> Result<Vec<Team>> {
    let teams = session.api().list_teams(session.org()).await?;
    log::info!("{} has {} team(s)", session.org(), teams.len());
    Ok(teams)
}

/// Finds the team whose slug is exactly `slug`.
pub fn validate_team<'a>(teams: &'a [Team], slug: &str) -> Result<&'a Team> {
    teams
        .iter()
        .find(|team| team.slug == slug)
        .ok_or_else(|| Error::UnknownTeam {
            slug: slug.to_string(),
            known: teams.iter().map(|team| team.slug.clone()).collect(),
        })
}
