// ============================================================================
// mfinfo-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// All diagnostics go through the `log` facade and are written to stderr, so
// stdout carries nothing but the report.
//
// USAGE:
// - default: info and above
// - --verbose: debug and above (includes the probe document)
// - RUST_LOG=...: overrides both, e.g. RUST_LOG=mfinfo_core=trace

// ---- External crate imports ----
use log::LevelFilter;
use owo_colors::OwoColorize;

// ---- Standard library imports ----
use std::io::Write;

/// Initializes the global logger.
pub fn init(verbose: bool, color: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let tag = level_tag(record.level(), color);
            if verbose {
                let timestamp = buf.timestamp();
                writeln!(buf, "{} {} {}", timestamp, tag, record.args())
            } else {
                writeln!(buf, "{} {}", tag, record.args())
            }
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}

fn level_tag(level: log::Level, color: bool) -> String {
    let text = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };

    if !color {
        return text.to_string();
    }

    match level {
        log::Level::Error => text.bright_red().to_string(),
        log::Level::Warn => text.yellow().to_string(),
        log::Level::Info => text.green().to_string(),
        log::Level::Debug => text.blue().to_string(),
        log::Level::Trace => text.magenta().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tag_plain() {
        assert_eq!(level_tag(log::Level::Error, false), "ERROR");
        assert_eq!(level_tag(log::Level::Warn, false), "WARN ");
    }

    #[test]
    fn test_level_tag_colored_keeps_text() {
        let tag = level_tag(log::Level::Info, true);
        assert!(tag.contains("INFO"));
        assert_ne!(tag, "INFO ");
    }
}
