// Hostname Resolver - Multi-strategy resolution of a single hostname
//
// Every hostname is looked up with several independent strategies (the
// operating system resolver plus explicit A and AAAA queries). Strategies run
// concurrently, each under its own timeout, and their answers are unioned.
// One strategy failing never affects the others.

use crate::Result;
use crate::error::DiscoveryError;
use crate::scanner::config::LookupConfig;
use crate::utils::custom_resolvers;
use async_trait::async_trait;
use futures::future::join_all;
use hickory_resolver::TokioAsyncResolver;
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Result of resolving one hostname
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// At least one address was found; the set is never empty
    Resolved(BTreeSet<IpAddr>),
    /// Every strategy failed, timed out, or returned no records
    Unresolved,
    /// The resolution itself blew up and was captured by the scheduler
    Failed(String),
}

/// A hostname paired with its resolution status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    pub hostname: String,
    pub status: ResolutionStatus,
}

impl ResolutionOutcome {
    /// Build an outcome from the addresses found; an empty set is `Unresolved`
    pub fn from_addresses(hostname: impl Into<String>, addresses: BTreeSet<IpAddr>) -> Self {
        let status = if addresses.is_empty() {
            ResolutionStatus::Unresolved
        } else {
            ResolutionStatus::Resolved(addresses)
        };

        Self {
            hostname: hostname.into(),
            status,
        }
    }

    pub fn unresolved(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            status: ResolutionStatus::Unresolved,
        }
    }

    pub fn failed(hostname: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            status: ResolutionStatus::Failed(reason.into()),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.status, ResolutionStatus::Resolved(_))
    }

    /// Resolved addresses, if any
    pub fn addresses(&self) -> Option<&BTreeSet<IpAddr>> {
        match &self.status {
            ResolutionStatus::Resolved(addrs) => Some(addrs),
            _ => None,
        }
    }
}

/// One independent way of turning a hostname into addresses
#[async_trait]
pub trait LookupStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Look up the hostname once; no retries
    async fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>>;
}

/// Anything that can resolve a hostname into an outcome
///
/// The scheduler only depends on this trait, which keeps it testable with
/// scripted resolvers.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, hostname: &str) -> ResolutionOutcome;
}

/// Operating system resolver (getaddrinfo through tokio)
///
/// Yields whatever address families the local resolver infrastructure
/// supports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStrategy;

#[async_trait]
impl LookupStrategy for SystemStrategy {
    fn name(&self) -> &'static str {
        "system"
    }

    async fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((hostname, 0))
            .await
            .map_err(|e| DiscoveryError::DnsResolutionFailed {
                hostname: hostname.to_string(),
                details: e.to_string(),
            })?;

        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

/// Explicit A record query
pub struct ARecordStrategy {
    resolver: Arc<TokioAsyncResolver>,
}

impl ARecordStrategy {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl LookupStrategy for ARecordStrategy {
    fn name(&self) -> &'static str {
        "A"
    }

    async fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        let name = fully_qualified(hostname);
        let lookup = self
            .resolver
            .ipv4_lookup(name.as_str())
            .await
            .map_err(|e| DiscoveryError::DnsResolutionFailed {
                hostname: hostname.to_string(),
                details: e.to_string(),
            })?;

        Ok(lookup.iter().map(|record| IpAddr::V4(record.0)).collect())
    }
}

/// Explicit AAAA record query
pub struct AaaaRecordStrategy {
    resolver: Arc<TokioAsyncResolver>,
}

impl AaaaRecordStrategy {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl LookupStrategy for AaaaRecordStrategy {
    fn name(&self) -> &'static str {
        "AAAA"
    }

    async fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        let name = fully_qualified(hostname);
        let lookup = self
            .resolver
            .ipv6_lookup(name.as_str())
            .await
            .map_err(|e| DiscoveryError::DnsResolutionFailed {
                hostname: hostname.to_string(),
                details: e.to_string(),
            })?;

        Ok(lookup.iter().map(|record| IpAddr::V6(record.0)).collect())
    }
}

/// Absolute name so that search domains are never appended
fn fully_qualified(hostname: &str) -> String {
    if hostname.ends_with('.') {
        hostname.to_string()
    } else {
        format!("{}.", hostname)
    }
}

/// Resolves a hostname with every configured strategy and merges the answers
pub struct HostnameResolver {
    strategies: Vec<Box<dyn LookupStrategy>>,
    timeout: Duration,
}

impl HostnameResolver {
    /// Create a resolver from explicit strategies
    pub fn new(strategies: Vec<Box<dyn LookupStrategy>>, timeout: Duration) -> Self {
        Self {
            strategies,
            timeout,
        }
    }

    /// Build the strategy set described by the lookup configuration
    ///
    /// The A and AAAA strategies share one hickory resolver, configured from
    /// the system or from the custom nameservers.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        config.validate()?;

        let mut strategies: Vec<Box<dyn LookupStrategy>> = Vec::new();

        if config.use_system {
            strategies.push(Box::new(SystemStrategy));
        }

        if config.use_ipv4 || config.use_ipv6 {
            let dns = Arc::new(custom_resolvers::build_dns_resolver(
                &config.nameservers,
                config.timeout,
            ));

            if config.use_ipv4 {
                strategies.push(Box::new(ARecordStrategy::new(Arc::clone(&dns))));
            }
            if config.use_ipv6 {
                strategies.push(Box::new(AaaaRecordStrategy::new(dns)));
            }
        }

        Ok(Self::new(strategies, config.timeout))
    }

    /// Names of the configured strategies, in execution order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Per-strategy timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one strategy under the timeout; failures contribute nothing
    async fn run_strategy(&self, strategy: &dyn LookupStrategy, hostname: &str) -> Vec<IpAddr> {
        match tokio::time::timeout(self.timeout, strategy.lookup(hostname)).await {
            Ok(Ok(addrs)) => addrs,
            Ok(Err(e)) => {
                debug!("{} lookup failed: {}", strategy.name(), e);
                Vec::new()
            }
            Err(_) => {
                debug!(
                    "{} lookup for {} timed out after {:?}",
                    strategy.name(),
                    hostname,
                    self.timeout
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl Resolve for HostnameResolver {
    async fn resolve(&self, hostname: &str) -> ResolutionOutcome {
        let lookups = self
            .strategies
            .iter()
            .map(|strategy| self.run_strategy(strategy.as_ref(), hostname));

        let addresses: BTreeSet<IpAddr> = join_all(lookups).await.into_iter().flatten().collect();

        ResolutionOutcome::from_addresses(hostname, addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    /// Strategy answering after a fixed delay
    struct Scripted {
        name: &'static str,
        delay: Duration,
        answer: Option<Vec<IpAddr>>,
    }

    #[async_trait]
    impl LookupStrategy for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn lookup(&self, hostname: &str) -> Result<Vec<IpAddr>> {
            tokio::time::sleep(self.delay).await;
            self.answer
                .clone()
                .ok_or_else(|| DiscoveryError::DnsResolutionFailed {
                    hostname: hostname.to_string(),
                    details: "NXDOMAIN".to_string(),
                })
        }
    }

    fn v4() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))
    }

    fn v6() -> IpAddr {
        "2606:2800:220:1:248:1893:25c8:1946"
            .parse::<Ipv6Addr>()
            .unwrap()
            .into()
    }

    #[tokio::test(start_paused = true)]
    async fn test_merges_strategies_regardless_of_completion_order() {
        for (v4_delay, v6_delay) in [(10, 500), (500, 10)] {
            let resolver = HostnameResolver::new(
                vec![
                    Box::new(Scripted {
                        name: "system",
                        delay: Duration::from_millis(v4_delay),
                        answer: Some(vec![v4()]),
                    }),
                    Box::new(Scripted {
                        name: "AAAA",
                        delay: Duration::from_millis(v6_delay),
                        answer: Some(vec![v6()]),
                    }),
                ],
                Duration::from_secs(5),
            );

            let outcome = resolver.resolve("api.example.com").await;
            let addrs = outcome.addresses().expect("should resolve");
            assert_eq!(addrs.len(), 2);
            assert!(addrs.contains(&v4()));
            assert!(addrs.contains(&v6()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_deduplicates_addresses_across_strategies() {
        let resolver = HostnameResolver::new(
            vec![
                Box::new(Scripted {
                    name: "system",
                    delay: Duration::ZERO,
                    answer: Some(vec![v4(), v6()]),
                }),
                Box::new(Scripted {
                    name: "A",
                    delay: Duration::ZERO,
                    answer: Some(vec![v4()]),
                }),
            ],
            Duration::from_secs(5),
        );

        let outcome = resolver.resolve("api.example.com").await;
        assert_eq!(outcome.addresses().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_strategy_does_not_poison_others() {
        let resolver = HostnameResolver::new(
            vec![
                Box::new(Scripted {
                    name: "AAAA",
                    delay: Duration::ZERO,
                    answer: None,
                }),
                Box::new(Scripted {
                    name: "A",
                    delay: Duration::from_millis(20),
                    answer: Some(vec![v4()]),
                }),
            ],
            Duration::from_secs(5),
        );

        let outcome = resolver.resolve("www.example.com").await;
        assert_eq!(
            outcome.status,
            ResolutionStatus::Resolved(BTreeSet::from([v4()]))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades_to_no_addresses() {
        let resolver = HostnameResolver::new(
            vec![
                Box::new(Scripted {
                    name: "system",
                    delay: Duration::from_secs(60),
                    answer: Some(vec![v4()]),
                }),
                Box::new(Scripted {
                    name: "AAAA",
                    delay: Duration::from_millis(5),
                    answer: Some(vec![v6()]),
                }),
            ],
            Duration::from_secs(2),
        );

        let outcome = resolver.resolve("slow.example.com").await;
        assert_eq!(
            outcome.status,
            ResolutionStatus::Resolved(BTreeSet::from([v6()]))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_strategies_failing_is_unresolved() {
        let resolver = HostnameResolver::new(
            vec![
                Box::new(Scripted {
                    name: "system",
                    delay: Duration::from_secs(30),
                    answer: Some(vec![v4()]),
                }),
                Box::new(Scripted {
                    name: "A",
                    delay: Duration::ZERO,
                    answer: None,
                }),
                Box::new(Scripted {
                    name: "AAAA",
                    delay: Duration::ZERO,
                    answer: Some(vec![]),
                }),
            ],
            Duration::from_secs(1),
        );

        let outcome = resolver.resolve("gone.example.com").await;
        assert_eq!(outcome, ResolutionOutcome::unresolved("gone.example.com"));
        assert!(!outcome.is_resolved());
    }

    #[test]
    fn test_from_addresses_empty_is_unresolved() {
        let outcome = ResolutionOutcome::from_addresses("a.example.com", BTreeSet::new());
        assert_eq!(outcome.status, ResolutionStatus::Unresolved);
        assert!(outcome.addresses().is_none());
    }

    #[test]
    fn test_fully_qualified() {
        assert_eq!(fully_qualified("example.com"), "example.com.");
        assert_eq!(fully_qualified("example.com."), "example.com.");
    }

    #[tokio::test]
    async fn test_from_config_selects_strategies() {
        let config = LookupConfig {
            use_system: true,
            use_ipv4: false,
            use_ipv6: true,
            ..Default::default()
        };

        let resolver = HostnameResolver::from_config(&config).unwrap();
        assert_eq!(resolver.strategy_names(), vec!["system", "AAAA"]);
        assert_eq!(resolver.timeout(), config.timeout);
    }

    #[test]
    fn test_from_config_rejects_no_strategies() {
        let config = LookupConfig {
            use_system: false,
            use_ipv4: false,
            use_ipv6: false,
            ..Default::default()
        };

        assert!(HostnameResolver::from_config(&config).is_err());
    }
}
