/// Custom DNS Resolvers - Nameserver selection for the A/AAAA strategies
///
/// By default the explicit record queries use the system resolver
/// configuration. Users can point them at specific nameservers instead:
/// - Comparing what public resolvers see against the local resolver
/// - Avoiding split-horizon answers from a corporate resolver
/// - Avoiding DNS spoofing or poisoning from ISP DNS
use crate::Result;
use crate::error::DiscoveryError;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::*;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Default DNS port when a resolver is given without one
const DNS_PORT: u16 = 53;

/// Parsed list of custom nameservers
#[derive(Debug, Clone)]
pub struct CustomResolvers {
    resolvers: Vec<SocketAddr>,
}

impl CustomResolvers {
    /// Parse resolver addresses
    ///
    /// # Arguments
    /// * `resolvers` - IP:port or bare IP entries; bare IPs get port 53
    ///   - Examples: "8.8.8.8", "1.1.1.1:53", "[2606:4700:4700::1111]:53"
    ///
    /// # Errors
    /// Returns an error if any entry cannot be parsed or the list is empty
    pub fn new(resolvers: Vec<String>) -> Result<Self> {
        let mut parsed_resolvers = Vec::new();

        for resolver_str in resolvers {
            let resolver_str = resolver_str.trim();
            if resolver_str.is_empty() {
                continue;
            }

            let socket_addr = match IpAddr::from_str(resolver_str) {
                Ok(ip) => SocketAddr::new(ip, DNS_PORT),
                Err(_) => SocketAddr::from_str(resolver_str).map_err(|e| {
                    DiscoveryError::ConfigError {
                        message: format!("Invalid resolver address '{}': {}", resolver_str, e),
                    }
                })?,
            };

            parsed_resolvers.push(socket_addr);
        }

        if parsed_resolvers.is_empty() {
            return Err(DiscoveryError::ConfigError {
                message: "No valid resolvers provided".to_string(),
            });
        }

        Ok(Self {
            resolvers: parsed_resolvers,
        })
    }

    /// Get the list of configured resolvers
    pub fn addresses(&self) -> &[SocketAddr] {
        &self.resolvers
    }

    /// Get the number of configured resolvers
    pub fn count(&self) -> usize {
        self.resolvers.len()
    }
}

/// Resolver configuration querying the given nameservers over UDP, TCP fallback
fn config_for_nameservers(nameservers: &[SocketAddr]) -> ResolverConfig {
    let mut config = ResolverConfig::new();
    for addr in nameservers {
        config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
        config.add_name_server(NameServerConfig::new(*addr, Protocol::Tcp));
    }
    config
}

/// Options shared by every hickory resolver the pipeline builds
///
/// One attempt per query, bounded by the per-strategy timeout.
fn lookup_options(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
    opts.timeout = timeout;
    opts.attempts = 1;
    opts
}

/// Build the async resolver backing the A and AAAA strategies
///
/// Empty `nameservers` means the system configuration (`/etc/resolv.conf`
/// or the platform equivalent); when that cannot be read, public defaults
/// are used.
pub fn build_dns_resolver(nameservers: &[SocketAddr], timeout: Duration) -> TokioAsyncResolver {
    if !nameservers.is_empty() {
        debug!("Using {} custom nameserver(s)", nameservers.len());
        let opts = lookup_options(ResolverOpts::default(), timeout);
        return TokioAsyncResolver::tokio(config_for_nameservers(nameservers), opts);
    }

    match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) => TokioAsyncResolver::tokio(config, lookup_options(opts, timeout)),
        Err(e) => {
            warn!("Could not read system DNS configuration ({}), using defaults", e);
            TokioAsyncResolver::tokio(
                ResolverConfig::default(),
                lookup_options(ResolverOpts::default(), timeout),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_port() {
        let resolver = CustomResolvers::new(vec!["8.8.8.8:53".to_string()]).unwrap();

        assert_eq!(resolver.count(), 1);
        assert_eq!(
            resolver.addresses()[0],
            SocketAddr::from_str("8.8.8.8:53").unwrap()
        );
    }

    #[test]
    fn test_parse_without_port() {
        let resolver = CustomResolvers::new(vec!["8.8.8.8".to_string()]).unwrap();

        let expected = SocketAddr::new("8.8.8.8".parse().unwrap(), 53);
        assert_eq!(resolver.addresses()[0], expected);
    }

    #[test]
    fn test_parse_ipv6() {
        let resolver = CustomResolvers::new(vec![
            "2606:4700:4700::1111".to_string(),
            "[2001:4860:4860::8888]:5353".to_string(),
        ])
        .unwrap();

        assert_eq!(resolver.addresses()[0].port(), 53);
        assert_eq!(resolver.addresses()[1].port(), 5353);
    }

    #[test]
    fn test_parse_multiple_resolvers_and_whitespace() {
        let resolver = CustomResolvers::new(vec![
            " 8.8.8.8 ".to_string(),
            "1.1.1.1:53".to_string(),
            "".to_string(),
            "208.67.222.222:5353".to_string(),
        ])
        .unwrap();

        assert_eq!(resolver.count(), 3);
    }

    #[test]
    fn test_empty_resolvers() {
        assert!(CustomResolvers::new(vec![]).is_err());
        assert!(CustomResolvers::new(vec!["  ".to_string()]).is_err());
    }

    #[test]
    fn test_invalid_entries() {
        assert!(CustomResolvers::new(vec!["invalid-ip".to_string()]).is_err());
        assert!(CustomResolvers::new(vec!["8.8.8.8:invalid".to_string()]).is_err());
    }

    #[test]
    fn test_nameserver_config_has_udp_and_tcp() {
        let addr = SocketAddr::from_str("9.9.9.9:53").unwrap();
        let config = config_for_nameservers(&[addr]);

        assert_eq!(config.name_servers().len(), 2);
    }

    #[test]
    fn test_lookup_options_single_attempt() {
        let opts = lookup_options(ResolverOpts::default(), Duration::from_secs(3));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.timeout, Duration::from_secs(3));
    }
}
