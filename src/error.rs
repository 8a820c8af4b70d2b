//! Errors that end a run.
//!
//! Every variant is fatal. The first four name an operator-facing condition
//! and carry the message shown on exit; [`Error::GitHub`] wraps whatever the
//! API client raised.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing 'GH_TOKEN' environment variable.")]
    MissingToken,

    #[error("Sorry, this script needs to be run with admin privileges (yours is: {role})")]
    NotAdmin { role: String },

    #[error("No team called \"{slug}\" in {known:?}")]
    UnknownTeam { slug: String, known: Vec<String> },

    #[error("Exited with no changes")]
    Declined,

    #[error("Could not read confirmation: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Could not read confirmation: {0}")]
    ReadAnswer(#[source] std::io::Error),

    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
