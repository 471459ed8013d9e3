//! Environment loading

use super::DbConfig;
use crate::error::Result;
use figment::providers::{Env, Serialized};
use figment::Figment;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Settings passed to the driver exactly as written in the environment.
const TEXT_KEYS: [&str; 4] = ["host", "user", "password", "name"];

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables that are already set are left untouched.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Resolve database settings: defaults < `DB_PASS` < `DB_*`.
pub fn load_db_config() -> Result<DbConfig> {
    Ok(figment().extract()?)
}

fn figment() -> Figment {
    Figment::from(Serialized::defaults(DbConfig::default()))
        // `DB_PASS` is what the web server reads; accept it as a fallback.
        .merge(Serialized::defaults(raw_env(
            Env::prefixed("DB_").only(&["pass"]).map(|_| "password".into()),
        )))
        .merge(Serialized::defaults(raw_env(Env::prefixed("DB_").only(&TEXT_KEYS))))
        .merge(Env::prefixed("DB_").only(&["port"]))
}

/// Unparsed values of `env`. The `Env` provider itself would turn `007`
/// into a number and `[abc]` into an array.
fn raw_env(env: Env) -> BTreeMap<String, String> {
    env.iter().map(|(key, value)| (key.as_str().to_ascii_lowercase(), value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_when_environment_is_empty() {
        Jail::expect_with(|_jail| {
            let cfg = load_db_config().expect("config");
            assert_eq!(cfg, DbConfig::default());
            assert_eq!(cfg.host, "localhost");
            assert_eq!(cfg.user, "root");
            assert_eq!(cfg.password, "");
            assert_eq!(cfg.name, "geocollect");
            assert_eq!(cfg.port, 3306);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "db.internal");
            jail.set_env("DB_USER", "loader");
            jail.set_env("DB_PASSWORD", "s3cret");
            jail.set_env("DB_NAME", "geocollect_test");
            jail.set_env("DB_PORT", "3307");

            let cfg = load_db_config().expect("config");
            assert_eq!(cfg.host, "db.internal");
            assert_eq!(cfg.user, "loader");
            assert_eq!(cfg.password, "s3cret");
            assert_eq!(cfg.name, "geocollect_test");
            assert_eq!(cfg.port, 3307);
            Ok(())
        });
    }

    #[test]
    fn numeric_password_stays_text() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_PASSWORD", "123456");
            assert_eq!(load_db_config().expect("config").password, "123456");
            Ok(())
        });
    }

    #[test]
    fn text_settings_are_kept_verbatim() {
        for raw in ["007", "1.50", "  spaced  ", "[abc]", "{x}", "true"] {
            Jail::expect_with(|jail| {
                jail.set_env("DB_PASSWORD", raw);
                jail.set_env("DB_USER", raw);
                jail.set_env("DB_NAME", raw);
                let cfg = load_db_config().expect("config");
                assert_eq!(cfg.password, raw);
                assert_eq!(cfg.user, raw);
                assert_eq!(cfg.name, raw);
                Ok(())
            });
        }
    }

    #[test]
    fn db_pass_fallback_is_kept_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_PASS", "0042");
            assert_eq!(load_db_config().expect("config").password, "0042");
            Ok(())
        });
    }

    #[test]
    fn db_pass_is_a_fallback_for_db_password() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_PASS", "from-server-env");
            assert_eq!(load_db_config().expect("config").password, "from-server-env");

            jail.set_env("DB_PASSWORD", "explicit");
            assert_eq!(load_db_config().expect("config").password, "explicit");
            Ok(())
        });
    }

    #[test]
    fn unrelated_db_variables_are_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_POOL_SIZE", "not-a-field");
            assert_eq!(load_db_config().expect("config"), DbConfig::default());
            Ok(())
        });
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_PORT", "not-a-port");
            let err = load_db_config().expect_err("bad port");
            assert!(err.to_string().starts_with("invalid database configuration"));
            Ok(())
        });
    }
}
