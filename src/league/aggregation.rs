use std::cmp::Ordering;
use std::sync::Arc;

use itertools::Itertools;
use tracing::debug;

use crate::common::MatchRecord;
use crate::common::PointsScheme;
use crate::common::Score;
use crate::common::Standings;
use crate::common::TeamName;
use crate::common::TeamStat;

/// Folds `matches` into per-team stats using the standard 3/1/0 points.
#[must_use]
pub fn aggregate(matches: &[MatchRecord]) -> Standings {
  aggregate_with(matches, &PointsScheme::default())
}

#[must_use]
pub fn aggregate_with(
  matches: &[MatchRecord],
  scheme: &PointsScheme,
) -> Standings {
  let standings =
    matches
      .iter()
      .fold(Standings::new(), |mut standings, match_record| {
        let MatchRecord {
          team1,
          team2,
          score,
          ..
        } = match_record;

        standings.entry(Arc::clone(team1)).or_default();
        standings.entry(Arc::clone(team2)).or_default();

        // NOTE: Unplayed fixtures only register both teams.
        if let Score::Played {
          team1_goals,
          team2_goals,
        } = *score
        {
          record_result(
            &mut standings,
            team1,
            team1_goals,
            team2_goals,
            scheme,
          );
          record_result(
            &mut standings,
            team2,
            team2_goals,
            team1_goals,
            scheme,
          );
        }

        standings
      });

  debug!(
    "aggregated {} matches into {} teams",
    matches.len(),
    standings.len()
  );

  standings
}

/// Sums partial standings built over disjoint parts of one match list.
#[must_use]
pub fn merge_standings(
  partials: impl IntoIterator<Item = Standings>,
) -> Standings {
  partials
    .into_iter()
    .flatten()
    .into_group_map_by(|(team, _)| Arc::clone(team))
    .into_iter()
    .map(|(team, stats)| {
      (
        team,
        stats
          .into_iter()
          .fold(TeamStat::default(), |acc, (_, stat)| acc + stat),
      )
    })
    .collect()
}

// NOTE: The team's record is read once and replaced by the updated record, so
// nothing derived from the previous record can leak into the next update.
fn record_result(
  standings: &mut Standings,
  team: &TeamName,
  goals_for: usize,
  goals_against: usize,
  scheme: &PointsScheme,
) {
  let current = standings.get(team).cloned().unwrap_or_default();
  let updated = with_result(&current, goals_for, goals_against, scheme);
  standings.insert(Arc::clone(team), updated);
}

fn with_result(
  stat: &TeamStat,
  goals_for: usize,
  goals_against: usize,
  scheme: &PointsScheme,
) -> TeamStat {
  let played = TeamStat {
    games_played: stat.games_played + 1,
    goals_scored: stat.goals_scored + goals_for,
    goals_conceded: stat.goals_conceded + goals_against,
    goal_difference: stat.goal_difference
      + goal_delta(goals_for, goals_against),
    ..TeamStat::clone(stat)
  };

  match goals_for.cmp(&goals_against) {
    Ordering::Greater => TeamStat {
      games_won: played.games_won + 1,
      points: played.points + scheme.win,
      ..played
    },
    Ordering::Equal => TeamStat {
      games_drawn: played.games_drawn + 1,
      points: played.points + scheme.draw,
      ..played
    },
    Ordering::Less => TeamStat {
      games_lost: played.games_lost + 1,
      points: played.points + scheme.loss,
      ..played
    },
  }
}

#[must_use]
fn goal_delta(goals_for: usize, goals_against: usize) -> isize {
  if goals_for >= goals_against {
    isize::try_from(goals_for - goals_against).unwrap_or(isize::MAX)
  } else {
    -isize::try_from(goals_against - goals_for).unwrap_or(isize::MAX)
  }
}
