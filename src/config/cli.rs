use super::toml_config::TomlConfig;
use super::{MapperConfig, BROKER_URL_ENV, DEFAULT_BROKER_URL, DEFAULT_OUTPUT_FILE};
use crate::utils::error::Result;
use clap::Parser;

/// Long flags that may also be spelled with a single dash (`-output`, `-url=...`).
const SINGLE_DASH_FLAGS: &[&str] = &[
    "output",
    "url",
    "config",
    "timeout-secs",
    "verbose",
    "log-json",
    "always-exit-zero",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "account-tag-mapper")]
#[command(about = "Generates a Telegraf Starlark script that tags metrics with NATS account names")]
pub struct CliArgs {
    #[arg(long, value_name = "PATH", help = format!("Path to output Starlark file [default: {}]", DEFAULT_OUTPUT_FILE))]
    pub output: Option<String>,

    #[arg(long, value_name = "URL", help = format!("NATS monitoring base URL, overrides {} [default: {}]", BROKER_URL_ENV, DEFAULT_BROKER_URL))]
    pub url: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Per-request timeout in seconds; requests wait indefinitely when unset
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Log failures but always exit with status 0
    #[arg(long)]
    pub always_exit_zero: bool,
}

impl CliArgs {
    /// Parses the process arguments, accepting Go-style single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }

    pub fn into_config(self) -> Result<MapperConfig> {
        let env_url = std::env::var(BROKER_URL_ENV).ok();
        self.into_config_with_env(env_url)
    }

    /// Resolves settings with precedence flag > environment > config file > default.
    pub fn into_config_with_env(self, env_url: Option<String>) -> Result<MapperConfig> {
        let mut config = MapperConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path);
            config = config.merge_file(&TomlConfig::from_file(path)?);
        }

        if let Some(url) = self.url.or(env_url.filter(|url| !url.is_empty())) {
            config.broker_url = url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(timeout) = self.timeout_secs {
            config.timeout_seconds = Some(timeout);
        }

        Ok(config)
    }
}

/// Rewrites `-output x` and `-url=y` style arguments into their `--` form.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut seen_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if seen_terminator || arg.starts_with("--") || !arg.starts_with('-') {
                if arg == "--" {
                    seen_terminator = true;
                }
                return arg;
            }

            let name = arg[1..].split('=').next().unwrap_or_default();
            if SINGLE_DASH_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
