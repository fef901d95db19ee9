use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::prelude::Utc;
use serde::Deserialize;
use tracing::info;

use crate::common::team_name;
use crate::common::League;
use crate::common::MatchRecord;
use crate::common::Score;
use crate::error::FetchError;

// NOTE: Used to reject obviously corrupted documents, no real match comes
// close.
const GOALS_MAX: usize = 1000;

const UNNAMED_LEAGUE: &str = "Unnamed League";

pub trait LeagueProvider {
  // NOTE: `download_league()` and `process_league()` only separated so that
  // downloaded documents can be captured and replayed in tests.
  fn download_league(&self) -> Result<String, FetchError>;

  fn process_league(&self, document: &str) -> Result<League, FetchError> {
    decode_league(document)
  }

  fn fetch_league(&self) -> Result<League, FetchError> {
    let document = self.download_league()?;
    let league = self.process_league(&document)?;

    info!(
      "fetched {:?} with {} matches",
      league.name,
      league.matches.len()
    );

    Ok(league)
  }
}

#[derive(Deserialize)]
struct Document {
  name: Option<String>,
  matches: Vec<DocumentMatch>,
}

#[derive(Deserialize)]
struct DocumentMatch {
  date: Option<String>,
  round: Option<String>,
  team1: String,
  team2: String,
  score: Option<DocumentScore>,
}

#[derive(Deserialize)]
struct DocumentScore {
  #[serde(default, alias = "finalScore")]
  ft: Option<Vec<usize>>,
}

/// Decodes an openfootball `football.json` competition document.
///
/// A present `score` means the match was played. Missing goals inside it
/// count as 0, so `"score": {}` is a 0-0 draw.
pub fn decode_league(document: &str) -> Result<League, FetchError> {
  let Document { name, matches } = serde_json::from_str(document)?;

  let matches = matches
    .into_iter()
    .enumerate()
    .map(|(index, document_match)| decode_match(index, document_match))
    .collect::<Result<Vec<MatchRecord>, FetchError>>()?;

  Ok(League {
    name: Arc::new(name.unwrap_or_else(|| String::from(UNNAMED_LEAGUE))),
    matches,
  })
}

fn decode_match(
  index: usize,
  DocumentMatch {
    date,
    round,
    team1,
    team2,
    score,
  }: DocumentMatch,
) -> Result<MatchRecord, FetchError> {
  if team1.trim().is_empty() || team2.trim().is_empty() {
    return Err(FetchError::InvalidTeam { index });
  }

  let score = match score {
    None => Score::Scheduled,
    Some(DocumentScore { ft }) => {
      let goals = ft.unwrap_or_default();
      let team1_goals = goals.first().copied().unwrap_or(0);
      let team2_goals = goals.get(1).copied().unwrap_or(0);

      if let Some(&invalid) =
        [team1_goals, team2_goals].iter().find(|&&g| g > GOALS_MAX)
      {
        return Err(FetchError::InvalidScore {
          team1,
          team2,
          score: invalid,
        });
      }

      Score::Played {
        team1_goals,
        team2_goals,
      }
    }
  };

  Ok(MatchRecord {
    date,
    round,
    team1: team_name(&team1),
    team2: team_name(&team2),
    score,
  })
}

/// Stores a downloaded document as `{dir}/{prefix}-{timestamp}` so it can be
/// replayed later.
pub fn capture_league(
  document: &str,
  dir: &Path,
  prefix: &str,
) -> Result<PathBuf, FetchError> {
  let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
  let path = dir.join(format!("{prefix}-{timestamp}"));

  fs::create_dir_all(dir).map_err(|source| FetchError::Io {
    path: dir.to_path_buf(),
    source,
  })?;
  fs::write(&path, document).map_err(|source| FetchError::Io {
    path: path.clone(),
    source,
  })?;

  info!("captured document to {:?}", path);

  Ok(path)
}
