use crate::{Error, GitHubApi, OctocrabClient, Result, User};

pub const TOKEN_VAR: &str = "GH_TOKEN";

/// Connection settings, gathered from the environment and command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub token: Option<String>,
    /// REST API root for GitHub Enterprise Server; `None` means api.github.com.
    pub api_url: Option<String>,
}

impl Config {
    pub fn from_env(api_url: Option<String>) -> Self {
        Self {
            token: std::env::var(TOKEN_VAR).ok(),
            api_url,
        }
    }

    /// The bearer token, rejecting a missing or blank value.
    pub fn token(&self) -> Result<&str> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::MissingToken),
        }
    }
}

/// An authenticated handle, checked to belong to an admin of `org`.
pub struct Session<A> {
    api: A,
    org: String,
    user: User,
}

impl Session<OctocrabClient> {
    pub async fn connect(config: &Config, org: &str) -> Result<Self> {
        let api = OctocrabClient::new(config.token()?, config.api_url.as_deref())?;
        Self::initialize(api, org).await
    }
}

impl<A: GitHubApi> Session<A> {
    /// Looks up who `api` is authenticated as and fails unless that user is
    /// an admin of `org`.
    pub async fn initialize(api: A, org: &str) -> Result<Self> {
        let user = api.authenticated_user().await?;
        println!(
            "Hi {} ({}), checking that you are an admin of the '{org}' org..",
            user.display_name(),
            user.login
        );

        let role = api.membership_role(org, &user.login).await?;
        log::info!("{} has role '{role}' in {org}", user.login);
        if role != "admin" {
            return Err(Error::NotAdmin { role });
        }

        Ok(Self {
            api,
            org: org.to_string(),
            user,
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
