use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_table::capture_league;
use league_table::format_table;
use league_table::LeagueProvider;
use league_table::LeagueTable;
use league_table::LocalFile;
use league_table::OpenFootball;
use league_table::PointsScheme;

const CAPTURE_PREFIX: &str = "openfootball";

#[derive(Debug, clap::Parser, Clone)]
#[command(version, about)]
struct Args {
  /// season directory in the openfootball repository
  #[arg(long, default_value = league_table::league::fetching::DEFAULT_SEASON)]
  season: String,

  /// competition document within the season, e.g. `en.1` or `de.1`
  #[arg(long, default_value = league_table::league::fetching::DEFAULT_COMPETITION)]
  competition: String,

  /// HTTPS URL of the competition document, overrides season and competition
  #[arg(long)]
  url: Option<String>,

  /// read the competition document from a file instead of downloading it
  #[arg(long, conflicts_with = "url")]
  file: Option<PathBuf>,

  /// where to store the downloaded document for later replay
  #[arg(long)]
  capture_dir: Option<PathBuf>,

  #[arg(long, default_value_t = PointsScheme::default().win)]
  win_points: usize,

  #[arg(long, default_value_t = PointsScheme::default().draw)]
  draw_points: usize,

  #[arg(long, default_value_t = PointsScheme::default().loss)]
  loss_points: usize,
}

impl Args {
  fn validate(&self) -> anyhow::Result<()> {
    if self.file.is_some() && self.capture_dir.is_some() {
      return Err(anyhow!("only downloaded documents can be captured"));
    }
    if self.win_points < self.draw_points || self.draw_points < self.loss_points
    {
      return Err(anyhow!(
        "points must not decrease from win to draw to loss ({}/{}/{})",
        self.win_points,
        self.draw_points,
        self.loss_points,
      ));
    }
    Ok(())
  }

  fn scheme(&self) -> PointsScheme {
    PointsScheme {
      win: self.win_points,
      draw: self.draw_points,
      loss: self.loss_points,
    }
  }

  fn provider(&self) -> Box<dyn LeagueProvider> {
    match (&self.file, &self.url) {
      (Some(path), _) => Box::new(LocalFile::new(path)),
      (None, Some(url)) => Box::new(OpenFootball::from_url(url.as_str())),
      (None, None) => {
        Box::new(OpenFootball::new(&self.season, &self.competition))
      }
    }
  }
}

fn main() -> anyhow::Result<()> {
  if env::var("RUST_LOG").is_err() {
    env::set_var("RUST_LOG", "info");
  }
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  args.validate()?;
  debug!("args: {args:?}");

  let provider = args.provider();
  let document = provider
    .download_league()
    .context("could not obtain the competition document")?;

  if let Some(dir) = &args.capture_dir {
    let path = capture_league(&document, dir, CAPTURE_PREFIX)?;
    info!("replay with --file {:?}", path);
  }

  let league = provider
    .process_league(&document)
    .context("could not decode the competition document")?;
  info!("{}: {} matches", league.name, league.matches.len());

  let table = LeagueTable::from_league(&league, &args.scheme());
  print!("{}", format_table(&table.name, &table.standings));

  Ok(())
}
