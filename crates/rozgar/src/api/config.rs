use std::{
  env::{self, VarError},
  fmt::Display,
  str::FromStr,
  time::Duration,
};

use librozgar::prelude::*;

use crate::api::errors::AppError;

#[derive(Clone, Debug)]
pub struct Config {
  pub env: Env,
  pub listen_addr: String,
  pub request_timeout: Duration,

  // Match settings
  pub top_n: usize,
  pub weight_factor: f64,
  pub min_score: Option<f64>,

  // Demo data, used when no posting was submitted yet
  pub demo_fallback: bool,
  pub demo_postings: usize,
  pub demo_seed: Option<u64>,

  // Debugging
  pub enable_tracing: bool,
  pub enable_prometheus: bool,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      env: Env::Dev,
      listen_addr: "0.0.0.0:8000".into(),
      request_timeout: Duration::from_secs(10),
      top_n: DEFAULT_TOP_N,
      weight_factor: DEFAULT_WEIGHT_FACTOR,
      min_score: None,
      demo_fallback: true,
      demo_postings: 50,
      demo_seed: None,
      enable_tracing: false,
      enable_prometheus: false,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Config, AppError> {
    let config = Config {
      env: Env::from(env::var("ENV").unwrap_or("dev".into())),
      listen_addr: env::var("LISTEN_ADDR").unwrap_or("0.0.0.0:8000".into()),
      request_timeout: Duration::from_secs(parse_env("REQUEST_TIMEOUT", 10)?),
      top_n: parse_env("MATCH_TOP_N", DEFAULT_TOP_N)?,
      weight_factor: parse_env("MATCH_WEIGHT_FACTOR", DEFAULT_WEIGHT_FACTOR)?,
      min_score: parse_env_opt("MATCH_MIN_SCORE")?,
      demo_fallback: env::var("DEMO_FALLBACK").unwrap_or("1".into()) == "1",
      demo_postings: parse_env("DEMO_POSTINGS", 50)?,
      demo_seed: parse_env_opt("DEMO_SEED")?,
      enable_tracing: env::var("ENABLE_TRACING").unwrap_or_default() == "1",
      enable_prometheus: env::var("ENABLE_PROMETHEUS").unwrap_or_default() == "1",
    };

    config.match_params(&MatchQuery::default()).ensure_valid().map_err(|err| AppError::ConfigError(err.to_string()))?;

    Ok(config)
  }

  /// Parameters of a match run, request overrides taking precedence over configured defaults.
  pub fn match_params(&self, query: &MatchQuery) -> MatchParams {
    MatchParams {
      top_n: query.top_n.unwrap_or(self.top_n),
      weight_factor: query.weight_factor.unwrap_or(self.weight_factor),
      min_score: query.min_score.or(self.min_score),
      ..Default::default()
    }
  }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct MatchQuery {
  pub top_n: Option<usize>,
  pub weight_factor: Option<f64>,
  pub min_score: Option<f64>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Env {
  Dev,
  Production,
}

impl From<String> for Env {
  fn from(value: String) -> Self {
    match value.as_ref() {
      "dev" => Env::Dev,
      "production" => Env::Production,
      _ => Env::Dev,
    }
  }
}

pub fn parse_env<T>(name: &str, default: T) -> anyhow::Result<T>
where
  T: FromStr,
  T::Err: Display,
{
  Ok(parse_env_opt(name)?.unwrap_or(default))
}

pub fn parse_env_opt<T>(name: &str) -> anyhow::Result<Option<T>>
where
  T: FromStr,
  T::Err: Display,
{
  match env::var(name) {
    Ok(value) if value.is_empty() => Ok(None),
    Ok(value) => Ok(Some(value.parse::<T>().map_err(|err| AppError::ConfigError(format!("could not read {name}: {err}")))?)),
    Err(err) => match err {
      VarError::NotPresent => Ok(None),
      _ => Err(AppError::ConfigError(format!("could not read {name}: {err}")).into()),
    },
  }
}

#[cfg(test)]
mod tests {
  use std::{env, time::Duration};

  use super::{Config, Env, MatchQuery};

  const VARS: [&str; 10] = [
    "ENV",
    "LISTEN_ADDR",
    "REQUEST_TIMEOUT",
    "MATCH_TOP_N",
    "MATCH_WEIGHT_FACTOR",
    "MATCH_MIN_SCORE",
    "DEMO_FALLBACK",
    "DEMO_POSTINGS",
    "DEMO_SEED",
    "ENABLE_TRACING",
  ];

  fn clear() {
    for var in VARS {
      unsafe { env::remove_var(var) };
    }
  }

  #[test]
  #[serial_test::serial]
  fn parse_config_from_env() {
    clear();

    unsafe {
      env::set_var("ENV", "production");
      env::set_var("LISTEN_ADDR", "0.0.0.0:8080");
      env::set_var("REQUEST_TIMEOUT", "3");
      env::set_var("MATCH_TOP_N", "5");
      env::set_var("MATCH_WEIGHT_FACTOR", "1.5");
      env::set_var("MATCH_MIN_SCORE", "0.1");
      env::set_var("DEMO_FALLBACK", "0");
      env::set_var("DEMO_POSTINGS", "20");
      env::set_var("DEMO_SEED", "42");
      env::set_var("ENABLE_TRACING", "1");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.top_n, 5);
    assert_eq!(config.weight_factor, 1.5);
    assert_eq!(config.min_score, Some(0.1));
    assert!(!config.demo_fallback);
    assert_eq!(config.demo_postings, 20);
    assert_eq!(config.demo_seed, Some(42));
    assert!(config.enable_tracing);

    clear();
  }

  #[test]
  #[serial_test::serial]
  fn default_config() {
    clear();

    let config = Config::from_env().unwrap();

    assert_eq!(config.env, Env::Dev);
    assert_eq!(config.top_n, 3);
    assert_eq!(config.weight_factor, 1.2);
    assert_eq!(config.min_score, None);
    assert!(config.demo_fallback);
    assert_eq!(config.demo_seed, None);
  }

  #[test]
  #[serial_test::serial]
  fn invalid_weight_factor() {
    clear();

    unsafe { env::set_var("MATCH_WEIGHT_FACTOR", "0.5") };

    assert!(Config::from_env().is_err());

    unsafe { env::set_var("MATCH_WEIGHT_FACTOR", "heavy") };

    assert!(Config::from_env().is_err());

    clear();
  }

  #[test]
  #[serial_test::serial]
  fn parse_env() {
    unsafe {
      env::set_var("INT", "42");
      env::set_var("BOOL", "true");
      env::set_var("EMPTY", "");
    }

    assert_eq!(super::parse_env::<u32>("INT", 0).unwrap(), 42);
    assert!(super::parse_env::<bool>("BOOL", false).unwrap());
    assert_eq!(super::parse_env::<u32>("EMPTY", 7).unwrap(), 7);
    assert_eq!(super::parse_env_opt::<u32>("MISSING_VARIABLE").unwrap(), None);

    assert!(super::parse_env::<u32>("BOOL", 0).is_err());
  }

  #[test]
  fn query_overrides_defaults() {
    let config = Config { min_score: Some(0.2), ..Default::default() };

    let params = config.match_params(&MatchQuery::default());

    assert_eq!(params.top_n, 3);
    assert_eq!(params.weight_factor, 1.2);
    assert_eq!(params.min_score, Some(0.2));

    let params = config.match_params(&MatchQuery {
      top_n: Some(10),
      weight_factor: Some(2.0),
      min_score: Some(0.0),
    });

    assert_eq!(params.top_n, 10);
    assert_eq!(params.weight_factor, 2.0);
    assert_eq!(params.min_score, Some(0.0));
  }
}
