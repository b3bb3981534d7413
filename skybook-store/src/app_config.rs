use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_TICKET_FILE: &str = "tickets.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub tickets: TicketsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TicketsConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when RUST_LOG is unset.
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let s = config::Config::builder()
            .set_default("tickets.path", DEFAULT_TICKET_FILE)?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            // Every file is optional; a bare checkout runs on the defaults
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Local overrides, not checked in
            .add_source(file("local"))
            // Eg.. `SKYBOOK__TICKETS__PATH=/var/lib/skybook/tickets.txt`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    // Tests that read or set process env vars run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn run_mode() -> String {
        env::var("RUN_MODE").unwrap_or_else(|_| "development".into())
    }

    #[test]
    fn test_defaults_without_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        if env::var("SKYBOOK__TICKETS__PATH").is_err() {
            assert_eq!(config.tickets.path, PathBuf::from(DEFAULT_TICKET_FILE));
        }
        if env::var("SKYBOOK__LOGGING__FILTER").is_err() {
            assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        }
    }

    #[test]
    fn test_default_file_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[tickets]\npath = \"data/bookings.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        if env::var("SKYBOOK__TICKETS__PATH").is_err() {
            assert_eq!(config.tickets.path, PathBuf::from("data/bookings.txt"));
        }
    }

    #[test]
    fn test_run_mode_and_local_files_layer_in_order() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[tickets]\npath = \"default.txt\"\n\n[logging]\nfilter = \"error\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(format!("{}.toml", run_mode())),
            "[tickets]\npath = \"mode.txt\"\n\n[logging]\nfilter = \"debug\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[tickets]\npath = \"local.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        if env::var("SKYBOOK__TICKETS__PATH").is_err() {
            assert_eq!(config.tickets.path, PathBuf::from("local.txt"));
        }
        if env::var("SKYBOOK__LOGGING__FILTER").is_err() {
            assert_eq!(config.logging.filter, "debug");
        }
    }

    #[test]
    fn test_env_overrides_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[tickets]\npath = \"local.txt\"\n",
        )
        .unwrap();

        let previous = env::var_os("SKYBOOK__TICKETS__PATH");
        env::set_var("SKYBOOK__TICKETS__PATH", "/srv/skybook/tickets.txt");
        let config = Config::load_from(dir.path());
        match previous {
            Some(value) => env::set_var("SKYBOOK__TICKETS__PATH", value),
            None => env::remove_var("SKYBOOK__TICKETS__PATH"),
        }

        assert_eq!(
            config.unwrap().tickets.path,
            PathBuf::from("/srv/skybook/tickets.txt")
        );
    }
}
