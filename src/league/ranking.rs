use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::common::Standing;
use crate::common::Standings;

/// Orders `standings` by descending points.
///
/// Points are the only key. The sort is stable, so tied teams keep the
/// mapping's (ascending name) order.
#[must_use]
pub fn rank(standings: &Standings) -> Vec<Standing> {
  let ranked: Vec<Standing> = standings
    .iter()
    .sorted_by(|(_, first_stat), (_, second_stat)| {
      second_stat.points.cmp(&first_stat.points)
    })
    .enumerate()
    .map(|(i, (team, stat))| Standing {
      position: i + 1,
      team: Arc::clone(team),
      stat: stat.clone(),
    })
    .collect();

  debug!("ranked {} teams", ranked.len());

  ranked
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::rank;
  use crate::common::team_name;
  use crate::common::Standings;
  use crate::common::TeamStat;

  fn with_points(points: usize) -> TeamStat {
    TeamStat {
      points,
      ..TeamStat::default()
    }
  }

  #[test]
  fn test_rank_by_points() {
    let standings: Standings = vec![("A", 4), ("B", 1), ("C", 7)]
      .into_iter()
      .map(|(team, points)| (team_name(team), with_points(points)))
      .collect();

    let ranked: Vec<(usize, String, usize)> = rank(&standings)
      .into_iter()
      .map(|standing| {
        (
          standing.position,
          String::clone(&standing.team),
          standing.stat.points,
        )
      })
      .collect();

    assert_eq!(
      ranked,
      vec![
        (1, String::from("C"), 7),
        (2, String::from("A"), 4),
        (3, String::from("B"), 1),
      ]
    );
  }

  #[test]
  fn test_ties_keep_name_order() {
    let standings: Standings = vec![("Wolves", 3), ("Burnley", 3), ("Leeds", 6)]
      .into_iter()
      .map(|(team, points)| (team_name(team), with_points(points)))
      .collect();

    let teams: Vec<String> = rank(&standings)
      .into_iter()
      .map(|standing| String::clone(&standing.team))
      .collect();

    assert_eq!(teams, vec!["Leeds", "Burnley", "Wolves"]);
  }

  #[test]
  fn test_rank_empty() {
    assert!(rank(&Standings::new()).is_empty());
  }
}
