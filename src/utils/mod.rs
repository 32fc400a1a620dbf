pub mod build_info;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".overview_core";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "overview_core=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // Logs go to stderr so rendered tables on stdout stay clean.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.overview_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("OVERVIEW_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted configuration file inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Picks the candidate closest to `needle` by edit distance, if any is
/// within three edits.
pub fn closest_match<'a>(
    needle: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = needle.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (strsim::levenshtein(&needle, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_match_tolerates_small_typos() {
        let names = ["Rows read", "Rows written", "Logins"];
        assert_eq!(closest_match("rows reed", names), Some("Rows read"));
        assert_eq!(closest_match("login", names), Some("Logins"));
        assert_eq!(closest_match("Payments", names), None);
    }
}
