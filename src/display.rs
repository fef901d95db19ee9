use std::fmt::Write;

use crate::common::Standing;

const TABLE_WIDTH: usize = 101;

/// Renders ranked rows as a framed, fixed-width text table.
#[must_use]
pub fn format_table(name: &str, standings: &[Standing]) -> String {
  let mut table = String::new();

  // NOTE: Writing into a `String` can't fail.
  // SEE: https://doc.rust-lang.org/std/fmt/#fillalignment
  let _ = writeln!(table, "|{:-^width$}|", "", width = TABLE_WIDTH);
  let _ = writeln!(table, "|{:^width$}|", name, width = TABLE_WIDTH);
  let _ = writeln!(table, "|{:-^width$}|", "", width = TABLE_WIDTH);
  let _ = writeln!(
    table,
    "| {position:8} | {club:30} | {played:6} | {won:3} | {drawn:5} | {lost:4} | {gf:3} | {ga:3} | {gd:4} | {points:6} |",
    position = "Position",
    club = "Club",
    played = "Played",
    won = "Won",
    drawn = "Drawn",
    lost = "Lost",
    gf = "GF",
    ga = "GA",
    gd = "GD",
    points = "Points",
  );
  let _ = writeln!(table, "|{:-^width$}|", "", width = TABLE_WIDTH);

  if standings.is_empty() {
    let _ = writeln!(table, "|{:^width$}|", "No data.", width = TABLE_WIDTH);
  }

  for Standing {
    position,
    team,
    stat,
  } in standings
  {
    let _ = writeln!(
      table,
      "| {position:8} | {club:30} | {played:6} | {won:3} | {drawn:5} | {lost:4} | {gf:3} | {ga:3} | {gd:4} | {points:6} |",
      position = position,
      club = team,
      played = stat.games_played,
      won = stat.games_won,
      drawn = stat.games_drawn,
      lost = stat.games_lost,
      gf = stat.goals_scored,
      ga = stat.goals_conceded,
      gd = stat.goal_difference,
      points = stat.points,
    );
  }

  let _ = writeln!(table, "|{:-^width$}|", "", width = TABLE_WIDTH);

  table
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::format_table;
  use crate::common::MatchRecord;
  use crate::league::aggregation::aggregate;
  use crate::league::ranking::rank;

  const RULE: &str = "|-----------------------------------------------------------------------------------------------------|";
  const HEADER: &str = "| Position | Club                           | Played | Won | Drawn | Lost | GF  | GA  | GD   | Points |";

  #[test]
  fn test_format_empty_table() {
    let table = format_table("Empty", &[]);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(
      lines,
      vec![
        RULE,
        "|                                                Empty                                                |",
        RULE,
        HEADER,
        RULE,
        "|                                              No data.                                               |",
        RULE,
      ]
    );
  }

  #[test]
  fn test_format_table() {
    let standings = rank(&aggregate(&[
      MatchRecord::played("Fulham FC", "Arsenal FC", 0, 3),
      MatchRecord::scheduled("Burnley FC", "Manchester United FC"),
    ]));
    let table = format_table("English Premier League 2020/21", &standings);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[3], HEADER);
    assert_eq!(
      &lines[5..9],
      &[
        "|        1 | Arsenal FC                     |      1 |   1 |     0 |    0 |   3 |   0 |    3 |      3 |",
        "|        2 | Burnley FC                     |      0 |   0 |     0 |    0 |   0 |   0 |    0 |      0 |",
        "|        3 | Fulham FC                      |      1 |   0 |     0 |    1 |   0 |   3 |   -3 |      0 |",
        "|        4 | Manchester United FC           |      0 |   0 |     0 |    0 |   0 |   0 |    0 |      0 |",
      ]
    );
    assert_eq!(lines[9], RULE);
  }
}
