use std::collections::BTreeMap;
use std::ops;
use std::sync::Arc;

pub type TeamName = Arc<String>;

/// Team name to accumulated stats, iterated in ascending name order.
pub type Standings = BTreeMap<TeamName, TeamStat>;

pub const WIN_FACTOR: usize = 3;
pub const DRAW_FACTOR: usize = 1;
pub const LOSS_FACTOR: usize = 0;

/// Normalizes a raw team name into the key used by [`Standings`].
#[must_use]
pub fn team_name(raw: &str) -> TeamName {
  Arc::new(String::from(raw.trim()))
}

#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Score {
  Scheduled,
  Played { team1_goals: usize, team2_goals: usize },
}

#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRecord {
  pub date: Option<String>,
  pub round: Option<String>,
  pub team1: TeamName,
  pub team2: TeamName,
  pub score: Score,
}

impl MatchRecord {
  pub fn played(
    team1: &str,
    team2: &str,
    team1_goals: usize,
    team2_goals: usize,
  ) -> Self {
    Self {
      date: None,
      round: None,
      team1: team_name(team1),
      team2: team_name(team2),
      score: Score::Played {
        team1_goals,
        team2_goals,
      },
    }
  }

  pub fn scheduled(team1: &str, team2: &str) -> Self {
    Self {
      date: None,
      round: None,
      team1: team_name(team1),
      team2: team_name(team2),
      score: Score::Scheduled,
    }
  }
}

/// Points awarded per result.
#[must_use]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointsScheme {
  pub win: usize,
  pub draw: usize,
  pub loss: usize,
}

impl Default for PointsScheme {
  fn default() -> Self {
    Self {
      win: WIN_FACTOR,
      draw: DRAW_FACTOR,
      loss: LOSS_FACTOR,
    }
  }
}

#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TeamStat {
  pub games_played: usize,
  pub games_won: usize,
  pub games_drawn: usize,
  pub games_lost: usize,
  pub goals_scored: usize,
  pub goals_conceded: usize,
  pub goal_difference: isize,
  pub points: usize,
}

impl ops::Add for TeamStat {
  type Output = Self;

  // NOTE(MUST-CHANGE-WHENEVER-STRUCT-FIELDS-CHANGE)
  fn add(self, other: Self) -> Self {
    Self {
      games_played: self.games_played + other.games_played,
      games_won: self.games_won + other.games_won,
      games_drawn: self.games_drawn + other.games_drawn,
      games_lost: self.games_lost + other.games_lost,
      goals_scored: self.goals_scored + other.goals_scored,
      goals_conceded: self.goals_conceded + other.goals_conceded,
      goal_difference: self.goal_difference + other.goal_difference,
      points: self.points + other.points,
    }
  }
}

/// A ranked row of the league table.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Standing {
  pub position: usize,
  pub team: TeamName,
  pub stat: TeamStat,
}

/// A decoded competition document.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct League {
  pub name: Arc<String>,
  pub matches: Vec<MatchRecord>,
}
