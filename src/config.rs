use anyhow::{anyhow, ensure, Context as _, Result};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::args::ConfigArgs;

pub const CASH_BOOK_PATH: &str = "CASH_BOOK_PATH";
pub const NOTIMON_LOG_PATH: &str = "NOTIMON_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the cash book, holding `marker.md` and the `<YYYY>/<MM>/` document directories
    pub cash_book_path: PathBuf,
    /// Root of the notimon logs, holding the `<YYYY>/<MM>/` log directories
    pub notimon_log_path: PathBuf,
}

impl Config {
    /// Loads the configuration from command line flags, the process environment and the `.env` file,
    /// in this order of precedence, and validates it.
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        let env_file = load_env_file(args.env_file.as_deref())?;
        let config = Self::resolve(args, &env_file, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn resolve(
        args: &ConfigArgs,
        env_file: &HashMap<String, String>,
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let lookup = |key: &str, flag: Option<&PathBuf>| {
            flag.cloned()
                .or_else(|| env_var(key).filter(|value| !value.is_empty()).map(PathBuf::from))
                .or_else(|| {
                    env_file
                        .get(key)
                        .filter(|value| !value.is_empty())
                        .map(PathBuf::from)
                })
                .ok_or_else(|| anyhow!("{} is invalid: not configured", key))
        };
        Ok(Self {
            cash_book_path: lookup(CASH_BOOK_PATH, args.cash_book_path.as_ref())?,
            notimon_log_path: lookup(NOTIMON_LOG_PATH, args.notimon_log_path.as_ref())?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cash_book_path.is_dir(),
            "{} is invalid: {} is not a directory",
            CASH_BOOK_PATH,
            self.cash_book_path.display(),
        );
        ensure!(
            self.notimon_log_path.is_dir(),
            "{} is invalid: {} is not a directory",
            NOTIMON_LOG_PATH,
            self.notimon_log_path.display(),
        );
        Ok(())
    }
}

/// Reads `path`, or a `.env` file in the working directory or one of its parents if no path is given.
/// Only an explicitly given file is required to exist.
fn load_env_file(path: Option<&Path>) -> Result<HashMap<String, String>> {
    let iter = match path {
        Some(path) => dotenvy::from_path_iter(path)
            .with_context(|| anyhow!("Failed to read {}", path.display()))?,
        None => match dotenvy::dotenv_iter() {
            Ok(iter) => iter,
            Err(err) if err.not_found() => {
                log::debug!("No .env file found");
                return Ok(HashMap::new());
            }
            Err(err) => return Err(err).context("Failed to read .env file"),
        },
    };
    iter.collect::<Result<HashMap<_, _>, _>>()
        .context("Failed to parse .env file")
}
