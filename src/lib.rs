//! Folds a season's football results into a league table.
//!
//! [`aggregate`] turns match records into per-team stats, [`rank`] orders them
//! by points and [`format_table`] renders the result. Documents are obtained
//! through a [`LeagueProvider`].

pub mod common;
pub mod display;
pub mod error;
pub mod league;

pub use crate::common::League;
pub use crate::common::MatchRecord;
pub use crate::common::PointsScheme;
pub use crate::common::Score;
pub use crate::common::Standing;
pub use crate::common::Standings;
pub use crate::common::TeamName;
pub use crate::common::TeamStat;
pub use crate::display::format_table;
pub use crate::error::FetchError;
pub use crate::league::aggregation::aggregate;
pub use crate::league::aggregation::aggregate_with;
pub use crate::league::aggregation::merge_standings;
pub use crate::league::fetching::common::capture_league;
pub use crate::league::fetching::common::decode_league;
pub use crate::league::fetching::common::LeagueProvider;
pub use crate::league::fetching::LocalFile;
pub use crate::league::fetching::OpenFootball;
pub use crate::league::get_league_table;
pub use crate::league::ranking::rank;
pub use crate::league::LeagueTable;
