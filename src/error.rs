use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
  #[error("request to {url} failed: {source}")]
  Http {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("{path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("malformed competition document: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("invalid score {score} in match {team1:?} vs {team2:?}")]
  InvalidScore {
    team1: String,
    team2: String,
    score: usize,
  },

  #[error("match {index} has an empty team name")]
  InvalidTeam { index: usize },
}
