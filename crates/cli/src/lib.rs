pub mod commands;

use tracing_subscriber::EnvFilter;

/// Environment variable that disables ANSI colors when set to any value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Pick the log filter: a `RUST_LOG` value wins, then `--verbose`, then warnings only.
pub fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("symaudit=debug,symaudit_core=debug"),
        None => EnvFilter::new("warn"),
    }
}

/// Install the stderr log subscriber. Stdout is reserved for the report.
pub fn init_logging(verbose: bool, color: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), verbose))
        .with_ansi(color)
        .with_target(true)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Colors are on unless `--no-color` was given or `NO_COLOR` is set.
pub fn use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os(NO_COLOR_ENV).is_none()
}
