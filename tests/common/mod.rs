use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use clone_team_permissions::{Error, GitHubApi, Repo, RepoTeam, Result, Team, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    User,
    Membership(String),
    Teams,
    TeamRepos(String),
    RepoTeams(String),
    SetPermission {
        team: String,
        repo: String,
        permission: String,
    },
}

/// In-memory organization. Writes land in `grants`, keyed by (team, repo).
pub struct FakeGitHub {
    pub login: String,
    pub role: String,
    pub teams: Vec<Team>,
    pub team_repos: HashMap<String, Vec<String>>,
    pub grants: Mutex<BTreeMap<(String, String), String>>,
    pub reject_writes_to: Option<String>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeGitHub {
    pub fn new(role: &str) -> Self {
        Self {
            login: "octocat".to_string(),
            role: role.to_string(),
            teams: vec![],
            team_repos: HashMap::new(),
            grants: Mutex::new(BTreeMap::new()),
            reject_writes_to: None,
            calls: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_team(mut self, slug: &str, repos: &[&str]) -> Self {
        self.teams.push(Team {
            slug: slug.to_string(),
            name: slug.replace('-', " "),
        });
        self.team_repos.insert(
            slug.to_string(),
            repos.iter().map(|repo| repo.to_string()).collect(),
        );
        self
    }

    pub fn with_grant(self, team: &str, repo: &str, permission: &str) -> Self {
        self.grants
            .lock()
            .unwrap()
            .insert((team.to_string(), repo.to_string()), permission.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::SetPermission { .. }))
            .collect()
    }

    pub fn grants(&self) -> BTreeMap<(String, String), String> {
        self.grants.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl GitHubApi for FakeGitHub {
    async fn authenticated_user(&self) -> Result<User> {
        self.record(Call::User);
        Ok(User {
            login: self.login.clone(),
            name: Some("The Octocat".to_string()),
        })
    }

    async fn membership_role(&self, _org: &str, username: &str) -> Result<String> {
        self.record(Call::Membership(username.to_string()));
        Ok(self.role.clone())
    }

    async fn list_teams(&self, _org: &str) -> Result<Vec<Team>> {
        self.record(Call::Teams);
        Ok(self.teams.clone())
    }

    async fn list_team_repos(&self, _org: &str, team_slug: &str) -> Result<Vec<Repo>> {
        self.record(Call::TeamRepos(team_slug.to_string()));
        Ok(self
            .team_repos
            .get(team_slug)
            .into_iter()
            .flatten()
            .map(|name| Repo { name: name.clone() })
            .collect())
    }

    async fn list_repo_teams(&self, _owner: &str, repo: &str) -> Result<Vec<RepoTeam>> {
        self.record(Call::RepoTeams(repo.to_string()));
        Ok(self
            .grants
            .lock()
            .unwrap()
            .iter()
            .filter(|((_, granted_repo), _)| granted_repo == repo)
            .map(|((team, _), permission)| RepoTeam {
                slug: team.clone(),
                permission: permission.clone(),
            })
            .collect())
    }

    async fn set_team_repo_permission(
        &self,
        _org: &str,
        team_slug: &str,
        _owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()> {
        self.record(Call::SetPermission {
            team: team_slug.to_string(),
            repo: repo.to_string(),
            permission: permission.to_string(),
        });
        if self.reject_writes_to.as_deref() == Some(repo) {
            return Err(Error::UnknownTeam {
                slug: team_slug.to_string(),
                known: vec![],
            });
        }
        self.grants
            .lock()
            .unwrap()
            .insert((team_slug.to_string(), repo.to_string()), permission.to_string());
        Ok(())
    }
}

pub fn write(team: &str, repo: &str, permission: &str) -> Call {
    Call::SetPermission {
        team: team.to_string(),
        repo: repo.to_string(),
        permission: permission.to_string(),
    }
}
