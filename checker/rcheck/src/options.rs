//! Argument and environment handling.
//!
//! Flags accept both `--flag value` and `--flag=value`. Catalog flags that
//! are not given fall back to `RCHECK_*` environment variables.

use rcheck_verify::CatalogConfig;

use crate::commands::CommandError;

pub const ENV_ENUM_FILE: &str = "RCHECK_ENUM_FILE";
pub const ENV_ENUM_NAME: &str = "RCHECK_ENUM_NAME";
pub const ENV_MESSAGES_FILE: &str = "RCHECK_MESSAGES_FILE";
pub const ENV_ARRAY_NAME: &str = "RCHECK_ARRAY_NAME";
pub const ENV_PREFIX: &str = "RCHECK_PREFIX";

/// Where to find the error enum and message array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub enum_file: Option<String>,
    pub enum_name: Option<String>,
    pub messages_file: Option<String>,
    pub array_name: Option<String>,
    pub prefix: Option<String>,
}

impl CatalogOptions {
    /// Fill unset options from `env` and build the catalog configuration.
    pub fn into_config(
        self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<CatalogConfig, CommandError> {
        let require = |value: Option<String>, flag: &str, var: &str| {
            value.or_else(|| env(var)).ok_or_else(|| {
                CommandError::Usage(format!("missing {flag} (or set {var})"))
            })
        };

        let enum_file = require(self.enum_file, "--enum-file", ENV_ENUM_FILE)?;
        let enum_name = require(self.enum_name, "--enum-name", ENV_ENUM_NAME)?;
        let messages_file = require(self.messages_file, "--messages-file", ENV_MESSAGES_FILE)?;
        let array_name = require(self.array_name, "--array-name", ENV_ARRAY_NAME)?;
        let prefix = self.prefix.or_else(|| env(ENV_PREFIX)).unwrap_or_default();

        Ok(CatalogConfig::new(enum_file, enum_name, messages_file, array_name)
            .with_error_prefix(prefix))
    }
}

/// Parsed arguments of one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub catalog: CatalogOptions,
    /// Recorded return code (`check`).
    pub rc: Option<String>,
    /// File holding the recorded stdout (`check`).
    pub stdout_file: Option<String>,
    /// Only compare the exit code (`check`).
    pub exit_only: bool,
    pub positional: Vec<String>,
}

impl ParsedArgs {
    /// The single positional argument, an enumerator name.
    pub fn single_name(&self, command: &str) -> Result<&str, CommandError> {
        match self.positional.as_slice() {
            [name] => Ok(name),
            [] => Err(CommandError::Usage(format!(
                "missing error name\nUsage: rcheck {command} <NAME> [options]"
            ))),
            [_, extra, ..] => Err(CommandError::Usage(format!(
                "unexpected argument '{extra}'\nUsage: rcheck {command} <NAME> [options]"
            ))),
        }
    }
}

/// Parse the arguments that follow the command name.
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, CommandError> {
    let mut parsed = ParsedArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--exit-only" {
            parsed.exit_only = true;
            continue;
        }
        if !arg.starts_with("--") {
            parsed.positional.push(arg.clone());
            continue;
        }

        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (arg.as_str(), None),
        };
        let slot = match flag {
            "--enum-file" => &mut parsed.catalog.enum_file,
            "--enum-name" => &mut parsed.catalog.enum_name,
            "--messages-file" => &mut parsed.catalog.messages_file,
            "--array-name" => &mut parsed.catalog.array_name,
            "--prefix" => &mut parsed.catalog.prefix,
            "--rc" => &mut parsed.rc,
            "--stdout" => &mut parsed.stdout_file,
            _ => return Err(CommandError::Usage(format!("unknown option '{flag}'"))),
        };

        let value = match inline {
            Some(value) => value,
            None => iter
                .next()
                .cloned()
                .ok_or_else(|| CommandError::Usage(format!("option '{flag}' needs a value")))?,
        };
        *slot = Some(value);
    }

    Ok(parsed)
}
