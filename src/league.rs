pub mod aggregation;
pub mod fetching;
pub mod ranking;

use std::sync::Arc;

use crate::common::League;
use crate::common::PointsScheme;
use crate::common::Standing;
use crate::error::FetchError;
use crate::league::aggregation::aggregate_with;
use crate::league::fetching::common::LeagueProvider;
use crate::league::ranking::rank;

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeagueTable {
  pub name: Arc<String>,
  pub standings: Vec<Standing>,
}

impl LeagueTable {
  pub fn from_league(league: &League, scheme: &PointsScheme) -> Self {
    Self {
      name: Arc::clone(&league.name),
      standings: rank(&aggregate_with(&league.matches, scheme)),
    }
  }
}

/// Fetches a league from `provider` and ranks it.
pub fn get_league_table(
  provider: &dyn LeagueProvider,
  scheme: &PointsScheme,
) -> Result<LeagueTable, FetchError> {
  let league = provider.fetch_league()?;

  Ok(LeagueTable::from_league(&league, scheme))
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::get_league_table;
  use super::LeagueTable;
  use crate::common::League;
  use crate::common::PointsScheme;
  use crate::error::FetchError;
  use crate::league::fetching::common::LeagueProvider;

  struct Inline(&'static str);

  impl LeagueProvider for Inline {
    fn download_league(&self) -> Result<String, FetchError> {
      Ok(String::from(self.0))
    }
  }

  #[test]
  fn test_get_league_table() {
    let table = get_league_table(
      &Inline(
        r#"{
          "name": "Mini League",
          "matches": [
            { "team1": "A", "team2": "B", "score": { "ft": [1, 1] } },
            { "team1": "B", "team2": "C", "score": { "ft": [0, 2] } },
            { "team1": "C", "team2": "A" }
          ]
        }"#,
      ),
      &PointsScheme::default(),
    )
    .unwrap();

    assert_eq!(table.name.as_str(), "Mini League");
    assert_eq!(
      table
        .standings
        .iter()
        .map(|standing| (standing.team.as_str(), standing.stat.points))
        .collect::<Vec<_>>(),
      vec![("C", 3), ("A", 1), ("B", 1)]
    );
  }

  #[test]
  fn test_decode_failure_is_propagated() {
    assert!(matches!(
      get_league_table(&Inline("not json"), &PointsScheme::default()),
      Err(FetchError::Decode(_))
    ));
  }

  #[test]
  fn test_empty_league() {
    let league = League {
      name: std::sync::Arc::new(String::from("Empty")),
      matches: vec![],
    };

    assert!(LeagueTable::from_league(&league, &PointsScheme::default())
      .standings
      .is_empty());
  }
}
