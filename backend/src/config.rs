//! Service configuration loaded via OrthoConfig.
//!
//! Values merge from defaults, an optional configuration file, `USERS_*`
//! environment variables and command-line flags.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_FILE: &str = "users.json";

/// Runtime settings for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServiceSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Path of the JSON file holding the user collection.
    pub data_file: Option<PathBuf>,
}

impl ServiceSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured data file, falling back to `users.json` in the
    /// working directory.
    pub fn data_file(&self) -> &Path {
        self.data_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_FILE))
    }

    /// Combine host and port into a socket address.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_args(args: &[&str]) -> ServiceSettings {
        let argv = std::iter::once(OsString::from("users-service"))
            .chain(args.iter().map(OsString::from));
        ServiceSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USERS_HOST", None::<String>),
            ("USERS_PORT", None::<String>),
            ("USERS_DATA_FILE", None::<String>),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.data_file(), Path::new(DEFAULT_DATA_FILE));
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_HOST", Some("127.0.0.1".to_owned())),
            ("USERS_PORT", Some("8081".to_owned())),
            ("USERS_DATA_FILE", Some("/tmp/users-test.json".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.port(), 8081);
        assert_eq!(settings.data_file(), Path::new("/tmp/users-test.json"));
        assert_eq!(
            settings.bind_addr().expect("configured address"),
            "127.0.0.1:8081".parse::<SocketAddr>().expect("literal")
        );
    }

    #[rstest]
    fn command_line_flags_take_precedence_over_environment() {
        let _guard = lock_env([
            ("USERS_HOST", None::<String>),
            ("USERS_PORT", Some("8081".to_owned())),
            ("USERS_DATA_FILE", None::<String>),
        ]);

        let settings = load_from_args(&["--port", "9090"]);
        assert_eq!(settings.port(), 9090);
    }

    #[rstest]
    #[case("localhost")]
    #[case("not an address")]
    fn non_ip_hosts_are_rejected(#[case] host: &str) {
        let settings = ServiceSettings {
            host: Some(host.to_owned()),
            port: None,
            data_file: None,
        };

        assert!(settings.bind_addr().is_err());
    }
}
