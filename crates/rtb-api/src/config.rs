//! # Server Configuration
//!
//! Command-line flags with environment fallbacks. The credential value is
//! deliberately absent here: only the *name* of the variable that holds it
//! is configured, and the guard reads that variable on every request.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};
use rtb_core::{EnvCredentialSource, GuardPolicy, DEFAULT_CREDENTIAL_VAR};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// RTB API gate: bearer-credential protection for `/api/` routes.
#[derive(Parser, Debug, Clone)]
#[command(name = "rtb-api", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "RTB_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Environment variable holding the expected bearer credential.
    #[arg(long, env = "RTB_CREDENTIAL_VAR", default_value = DEFAULT_CREDENTIAL_VAR)]
    pub credential_var: String,

    /// Path prefix of the protected namespace.
    #[arg(long, default_value = rtb_core::DEFAULT_PROTECTED_PREFIX)]
    pub protected_prefix: String,

    /// Path prefix reachable without a credential. Repeatable.
    #[arg(
        long = "exempt-prefix",
        value_name = "PREFIX",
        default_values_t = rtb_core::DEFAULT_EXEMPT_PREFIXES.map(String::from)
    )]
    pub exempt_prefixes: Vec<String>,

    /// Log output format.
    #[arg(long, env = "RTB_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn policy(&self) -> GuardPolicy {
        GuardPolicy::new(
            self.protected_prefix.clone(),
            self.exempt_prefixes.iter().cloned(),
        )
    }

    pub fn credential_source(&self) -> EnvCredentialSource {
        EnvCredentialSource::new(self.credential_var.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        ServerConfig::try_parse_from(std::iter::once("rtb-api").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_the_gate_defaults() {
        let config = parse(&[]);
        assert_eq!(config.policy(), GuardPolicy::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn custom_exempt_prefixes_replace_defaults() {
        let config = parse(&[
            "--protected-prefix",
            "/v1/",
            "--exempt-prefix",
            "/v1/live",
            "--exempt-prefix",
            "/v1/ready",
        ]);
        let policy = config.policy();
        assert_eq!(policy.protected_prefix(), "/v1/");
        assert_eq!(
            policy.exempt_prefixes(),
            ["/v1/live".to_string(), "/v1/ready".to_string()]
        );
    }

    #[test]
    fn explicit_port_and_host() {
        let config = parse(&["--host", "127.0.0.1", "--port", "9090"]);
        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn credential_var_is_configurable() {
        let config = parse(&["--credential-var", "OTHER_KEY", "--log-format", "json"]);
        assert_eq!(config.credential_source().var(), "OTHER_KEY");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_port_rejected() {
        let result = ServerConfig::try_parse_from(["rtb-api", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
