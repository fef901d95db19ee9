pub(crate) mod common;

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::league::fetching::common::LeagueProvider;

pub const DEFAULT_SEASON: &str = "2020-21";
pub const DEFAULT_COMPETITION: &str = "en.1";

/// Competition documents from the openfootball `football.json` repository.
#[must_use]
#[derive(Clone, Debug)]
pub struct OpenFootball {
  url: String,
}

impl OpenFootball {
  const BASE_URL: &'static str =
    "https://raw.githubusercontent.com/openfootball/football.json/master";

  pub fn new(season: &str, competition: &str) -> Self {
    Self::from_url(format!(
      "{base_url}/{season}/{competition}.json",
      base_url = Self::BASE_URL,
      season = season,
      competition = competition,
    ))
  }

  pub fn from_url(url: impl Into<String>) -> Self {
    Self { url: url.into() }
  }

  #[must_use]
  pub fn url(&self) -> &str {
    &self.url
  }

  fn http_error(&self, source: reqwest::Error) -> FetchError {
    FetchError::Http {
      url: self.url.clone(),
      source,
    }
  }
}

impl Default for OpenFootball {
  fn default() -> Self {
    Self::new(DEFAULT_SEASON, DEFAULT_COMPETITION)
  }
}

impl LeagueProvider for OpenFootball {
  fn download_league(&self) -> Result<String, FetchError> {
    debug!("downloading {}", self.url);

    let client = get_client().map_err(|source| self.http_error(source))?;

    // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.RequestBuilder.html#method.send
    client
      .get(self.url.as_str())
      .send()
      .and_then(reqwest::blocking::Response::error_for_status)
      .and_then(reqwest::blocking::Response::text)
      .map_err(|source| self.http_error(source))
  }
}

/// A competition document stored on disk, e.g. a captured download.
#[must_use]
#[derive(Clone, Debug)]
pub struct LocalFile {
  path: PathBuf,
}

impl LocalFile {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl LeagueProvider for LocalFile {
  fn download_league(&self) -> Result<String, FetchError> {
    debug!("reading {:?}", self.path);

    fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
      path: self.path.clone(),
      source,
    })
  }
}

fn get_client() -> Result<Client, reqwest::Error> {
  use reqwest::header::HeaderMap;
  use reqwest::header::HeaderValue;

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html#method.default_headers
  let mut headers = HeaderMap::new();
  headers.insert("Accept", HeaderValue::from_static("application/json"));
  headers.insert(
    "Accept-Language",
    HeaderValue::from_static("en-US,en;q=0.5"),
  );

  // SEE: https://docs.rs/reqwest/0.11.13/reqwest/blocking/struct.ClientBuilder.html
  Client::builder()
    .user_agent(concat!(
      env!("CARGO_PKG_NAME"),
      "/",
      env!("CARGO_PKG_VERSION")
    ))
    .https_only(true)
    .gzip(true)
    .deflate(true)
    .brotli(true)
    .default_headers(headers)
    .build()
}
