use std::io::{BufRead, IsTerminal, Write};

use crate::{Error, GitHubApi, RepoPermission, Result, Session, Team};

/// Asks the operator a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self(prompt)
    }
}

/// Reads the answer from the console. Only `y` or `yes` count as agreement.
///
/// An interactive terminal gets a dialoguer prompt; piped input is read one
/// line at a time from stdin.
pub struct ConsoleConfirm;

impl Confirm for ConsoleConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let prompt = format!("\n{prompt} (y/N)");
        if console::Term::stderr().is_term() && std::io::stdin().is_terminal() {
            let answer: String = dialoguer::Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(is_affirmative(&answer));
        }
        read_answer(&prompt, std::io::stdin().lock(), std::io::stdout().lock())
    }
}

/// Writes `prompt` to `output` and reads a single answer line from `input`.
/// End of input counts as no.
pub fn read_answer<R, W>(prompt: &str, mut input: R, mut output: W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt} ").map_err(Error::ReadAnswer)?;
    output.flush().map_err(Error::ReadAnswer)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(Error::ReadAnswer)?;
    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(is_affirmative(answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Fails with [`Error::Declined`] unless the operator agrees to write to
/// `to_team`.
pub fn confirm_copy<C: Confirm + ?Sized>(confirm: &mut C, to_team: &Team) -> Result<()> {
    let prompt = format!("Copy these repo permissions to {}?", to_team.slug);
    if confirm.confirm(&prompt)? {
        Ok(())
    } else {
        Err(Error::Declined)
    }
}

/// Grants each permission to `to_team`, one repository at a time. Stops at the
/// first failed write; grants already made are left in place.
pub async fn grant_access_to_team<A: GitHubApi>(
    session: &Session<A>,
    to_team: &Team,
    repos_with_roles: &[RepoPermission],
) -> Result<()> {
    for RepoPermission { repo, permission } in repos_with_roles {
        println!(
            " - granting '{permission}' permission on {repo} to {}..",
            to_team.slug
        );
        session
            .api()
            .set_team_repo_permission(
                session.org(),
                &to_team.slug,
                session.org(),
                repo,
                permission,
            )
            .await?;
    }
    Ok(())
}
