#![forbid(unsafe_code)]

//! Command-line argument parsing for the orbit demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `ORBIT_DEMO_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Orbit Demo - browse a portfolio ecosystem as a drill-down orbit diagram

USAGE:
    orbit-demo [OPTIONS]

OPTIONS:
    --tree=PATH          Load the tree from a JSON file (default: built-in ecosystem)
    --locale=CODE        Display locale, e.g. 'en' or 'de-AT' (default: from LC_ALL/LANG)
    --no-mouse           Disable mouse event capture
    --log-file=PATH      Write logs to PATH (filter with ORBIT_LOG, default: info)
    --state=PATH         Restore the navigation position from PATH and save it on exit
    --exit-after-ms=N    Quit after N milliseconds (0 = never)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Left/Right, Tab      Move focus between children
    Enter / Space        Open the focused child, or toggle a leaf
    Backspace / Esc      Go back one level
    Home                 Return to the root
    0-9                  Jump to breadcrumb depth N
    l                    Cycle display locale
    q / Ctrl+C           Quit

ENVIRONMENT VARIABLES:
    ORBIT_DEMO_TREE           Override --tree
    ORBIT_DEMO_LOCALE         Override --locale
    ORBIT_DEMO_LOG_FILE       Override --log-file
    ORBIT_DEMO_STATE          Override --state
    ORBIT_DEMO_EXIT_AFTER_MS  Auto-quit after N milliseconds (for testing)
    ORBIT_LOG                 Log filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Tree JSON file; `None` uses the bundled ecosystem.
    pub tree: Option<PathBuf>,
    /// Display locale; `None` detects it from the environment.
    pub locale: Option<String>,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Log destination; logging is off without one.
    pub log_file: Option<PathBuf>,
    /// Navigation snapshot file, read at start and written on exit.
    pub state: Option<PathBuf>,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            tree: None,
            locale: None,
            mouse: true,
            log_file: None,
            state: None,
            exit_after_ms: 0,
        }
    }
}

/// Outcome of parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Prints help or version and exits when
    /// asked to; exits with status 1 on a bad argument.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("orbit-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse from explicit sources.
    pub fn parse_from<I, F>(args: I, env_var: F) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env_var("ORBIT_DEMO_TREE").filter(|v| !v.is_empty()) {
            opts.tree = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("ORBIT_DEMO_LOCALE").filter(|v| !v.is_empty()) {
            opts.locale = Some(val);
        }
        if let Some(val) = env_var("ORBIT_DEMO_LOG_FILE").filter(|v| !v.is_empty()) {
            opts.log_file = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("ORBIT_DEMO_STATE").filter(|v| !v.is_empty()) {
            opts.state = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("ORBIT_DEMO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        // Command-line args override env vars
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--tree=") {
                        opts.tree = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--locale=") {
                        if val.is_empty() {
                            return Err("Invalid --locale value: empty".into());
                        }
                        opts.locale = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--state=") {
                        opts.state = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = val
                            .parse()
                            .map_err(|_| format!("Invalid --exit-after-ms value: {val}"))?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Command, String> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Opts::parse_from(args.iter().map(|a| a.to_string()), |k| env.get(k).cloned())
    }

    fn run(args: &[&str], env: &[(&str, &str)]) -> Opts {
        match parse(args, env) {
            Ok(Command::Run(opts)) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.tree, None);
        assert_eq!(opts.locale, None);
        assert!(opts.mouse);
        assert_eq!(opts.log_file, None);
        assert_eq!(opts.state, None);
        assert_eq!(opts.exit_after_ms, 0);
        assert_eq!(run(&[], &[]), opts);
    }

    #[test]
    fn flags_are_parsed() {
        let opts = run(
            &[
                "--tree=site.json",
                "--locale=de-AT",
                "--no-mouse",
                "--log-file=/tmp/orbit.log",
                "--state=nav.json",
                "--exit-after-ms=250",
            ],
            &[],
        );
        assert_eq!(opts.tree, Some(PathBuf::from("site.json")));
        assert_eq!(opts.locale.as_deref(), Some("de-AT"));
        assert!(!opts.mouse);
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/orbit.log")));
        assert_eq!(opts.state, Some(PathBuf::from("nav.json")));
        assert_eq!(opts.exit_after_ms, 250);
    }

    #[test]
    fn flags_override_env() {
        let env = [
            ("ORBIT_DEMO_TREE", "env.json"),
            ("ORBIT_DEMO_LOCALE", "fr"),
            ("ORBIT_DEMO_EXIT_AFTER_MS", "10"),
            ("ORBIT_DEMO_LOG_FILE", "env.log"),
            ("ORBIT_DEMO_STATE", "env-nav.json"),
        ];
        let opts = run(&[], &env);
        assert_eq!(opts.tree, Some(PathBuf::from("env.json")));
        assert_eq!(opts.locale.as_deref(), Some("fr"));
        assert_eq!(opts.exit_after_ms, 10);
        assert_eq!(opts.log_file, Some(PathBuf::from("env.log")));
        assert_eq!(opts.state, Some(PathBuf::from("env-nav.json")));

        let opts = run(&["--locale=de", "--exit-after-ms=99"], &env);
        assert_eq!(opts.locale.as_deref(), Some("de"));
        assert_eq!(opts.exit_after_ms, 99);
        assert_eq!(opts.tree, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let opts = run(&[], &[("ORBIT_DEMO_EXIT_AFTER_MS", "soon"), ("ORBIT_DEMO_LOCALE", "")]);
        assert_eq!(opts.exit_after_ms, 0);
        assert_eq!(opts.locale, None);
    }

    #[test]
    fn bad_flags_are_errors() {
        assert!(parse(&["--exit-after-ms=soon"], &[]).unwrap_err().contains("--exit-after-ms"));
        assert!(parse(&["--locale="], &[]).is_err());
        assert_eq!(parse(&["--bogus"], &[]).unwrap_err(), "Unknown argument: --bogus");
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(&["--help", "--bogus"], &[]), Ok(Command::Help));
        assert_eq!(parse(&["-V"], &[]), Ok(Command::Version));
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_contains_env_vars() {
        for var in [
            "ORBIT_DEMO_TREE",
            "ORBIT_DEMO_LOCALE",
            "ORBIT_DEMO_LOG_FILE",
            "ORBIT_DEMO_STATE",
            "ORBIT_DEMO_EXIT_AFTER_MS",
            "ORBIT_LOG",
        ] {
            assert!(HELP_TEXT.contains(var), "{var}");
        }
    }
}
