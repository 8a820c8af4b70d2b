use std::process::ExitCode;

use clap::Parser;

use clone_team_permissions::{clone_team_permissions, Config, ConsoleConfirm, Result, Session};

/// Find all repos for which a team has been granted an explicit access role,
/// and grant a different team the same access.
///
/// Requires a GH_TOKEN token in the environment, which belongs to an
/// organization admin, with 'repo' scope.
#[derive(Parser, Debug)]
#[command(name = "clone-team-permissions")]
#[command(version, about, long_about)]
struct Cli {
    /// your organization
    org: String,

    /// the source team slug
    fromteam: String,

    /// the team to which the permissions will be cloned
    toteam: String,

    /// GitHub REST API root, for GitHub Enterprise Server
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    api_url: Option<String>,
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli.api_url);
    let session = Session::connect(&config, &cli.org).await?;
    clone_team_permissions(&session, &cli.fromteam, &cli.toteam, &mut ConsoleConfirm).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()?;

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
