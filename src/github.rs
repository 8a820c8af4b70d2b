//! The slice of the GitHub REST API this tool talks to.

use futures_util::TryStreamExt;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;

use crate::{Membership, Repo, RepoTeam, Result, Team, User};

const PER_PAGE: u8 = 100;

/// GitHub operations used by the pipeline. Listing methods return every item,
/// following pagination to the last page.
#[async_trait::async_trait]
pub trait GitHubApi: Send + Sync {
    async fn authenticated_user(&self) -> Result<User>;

    /// Role of `username` in `org`, e.g. `admin` or `member`.
    async fn membership_role(&self, org: &str, username: &str) -> Result<String>;

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// Every repository `team_slug` can reach, whether granted directly or
    /// inherited from a parent team or the org's base permission.
    async fn list_team_repos(&self, org: &str, team_slug: &str) -> Result<Vec<Repo>>;

    /// Teams holding a grant on the repository itself, with that grant's level.
    async fn list_repo_teams(&self, owner: &str, repo: &str) -> Result<Vec<RepoTeam>>;

    /// Creates or overwrites the explicit grant of `team_slug` on `owner/repo`.
    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()>;
}

#[derive(serde::Serialize)]
struct PageParams {
    per_page: u8,
}

pub struct OctocrabClient {
    client: Octocrab,
}

impl OctocrabClient {
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut builder = octocrab::OctocrabBuilder::new().personal_token(token.to_string());
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url)?;
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn get_all<T>(&self, route: String) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        log::debug!("GET {route} (all pages)");
        let first: Page<T> = self
            .client
            .get(&route, Some(&PageParams { per_page: PER_PAGE }))
            .await?;
        let items: Vec<T> = first.into_stream(&self.client).try_collect().await?;
        log::debug!("GET {route} returned {} item(s)", items.len());
        Ok(items)
    }
}

#[async_trait::async_trait]
impl GitHubApi for OctocrabClient {
    async fn authenticated_user(&self) -> Result<User> {
        log::debug!("GET /user");
        Ok(self.client.get("/user", None::<&()>).await?)
    }

    async fn membership_role(&self, org: &str, username: &str) -> Result<String> {
        let route = format!("/orgs/{org}/memberships/{username}");
        log::debug!("GET {route}");
        let membership: Membership = self.client.get(&route, None::<&()>).await?;
        Ok(membership.role)
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.get_all(format!("/orgs/{org}/teams")).await
    }

    async fn list_team_repos(&self, org: &str, team_slug: &str) -> Result<Vec<Repo>> {
        self.get_all(format!("/orgs/{org}/teams/{team_slug}/repos"))
            .await
    }

    async fn list_repo_teams(&self, owner: &str, repo: &str) -> Result<Vec<RepoTeam>> {
        self.get_all(format!("/repos/{owner}/{repo}/teams")).await
    }

    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()> {
        let route = format!("/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}");
        log::debug!("PUT {route} permission={permission}");
        let body = serde_json::json!({ "permission": permission });
        // Answers 204 with an empty body, so skip deserialization.
        let response = self.client._put(route, Some(&body)).await?;
        octocrab::map_github_error(response).await?;
        Ok(())
    }
}
