//! Mode registry: an immutable mapping from processing mode to backend
//! endpoint.
//!
//! The registry is constructed once per process (normally from
//! configuration) and never mutated afterwards. Resolution is a pure lookup
//! over static data; what happens to an unrecognized identifier is decided
//! by the registry's [`UnknownModePolicy`], applied consistently for the
//! lifetime of the process.

use crate::mode::ProcessingMode;
use crate::outcome::SubmitError;
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// Validated network address of a backend analysis capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointAddress(Url);

impl EndpointAddress {
    /// Parse and validate an endpoint URL.
    pub fn parse(input: &str) -> Result<EndpointAddress, url::ParseError> {
        Url::parse(input).map(EndpointAddress)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What resolution does with an identifier that is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownModePolicy {
    /// Fail the submission with an `UnknownMode` error before any network
    /// call is made.
    Reject,
    /// Silently route to the registry's designated fallback endpoint.
    Fallback,
}

/// Immutable mode-to-endpoint routing table.
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    routes: HashMap<ProcessingMode, EndpointAddress>,
    fallback: EndpointAddress,
    policy: UnknownModePolicy,
}

impl ModeRegistry {
    /// Build a registry from a routing table, a designated fallback
    /// endpoint, and the unknown-mode policy.
    pub fn new(
        routes: HashMap<ProcessingMode, EndpointAddress>,
        fallback: EndpointAddress,
        policy: UnknownModePolicy,
    ) -> ModeRegistry {
        ModeRegistry {
            routes,
            fallback,
            policy,
        }
    }

    /// Resolve a UI-supplied mode identifier to an endpoint.
    ///
    /// A recognized mode with a route returns its endpoint. Anything else
    /// follows the policy: `Reject` yields [`SubmitError::UnknownMode`],
    /// `Fallback` yields the fallback endpoint.
    pub fn resolve(&self, mode: &str) -> Result<&EndpointAddress, SubmitError> {
        if let Some(known) = ProcessingMode::from_identifier(mode) {
            if let Some(endpoint) = self.routes.get(&known) {
                return Ok(endpoint);
            }
        }
        match self.policy {
            UnknownModePolicy::Reject => Err(SubmitError::UnknownMode(mode.to_string())),
            UnknownModePolicy::Fallback => Ok(&self.fallback),
        }
    }

    /// The route for a recognized mode, if one is configured.
    pub fn route(&self, mode: ProcessingMode) -> Option<&EndpointAddress> {
        self.routes.get(&mode)
    }

    pub fn fallback(&self) -> &EndpointAddress {
        &self.fallback
    }

    pub fn policy(&self) -> UnknownModePolicy {
        self.policy
    }

    /// Modes with a configured route, in UI order.
    pub fn modes(&self) -> Vec<ProcessingMode> {
        ProcessingMode::ALL
            .into_iter()
            .filter(|mode| self.routes.contains_key(mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(path: &str) -> EndpointAddress {
        EndpointAddress::parse(&format!("http://localhost:5173/api/{}", path))
            .expect("test endpoint to parse")
    }

    fn registry(policy: UnknownModePolicy) -> ModeRegistry {
        let routes = ProcessingMode::ALL
            .into_iter()
            .map(|mode| (mode, endpoint(mode.identifier())))
            .collect();
        ModeRegistry::new(routes, endpoint("lexer"), policy)
    }

    #[test]
    fn resolves_every_recognized_mode() {
        let registry = registry(UnknownModePolicy::Reject);
        for mode in ProcessingMode::ALL {
            let resolved = registry.resolve(mode.identifier()).expect("known mode");
            assert_eq!(resolved, &endpoint(mode.identifier()));
        }
    }

    #[test]
    fn reject_policy_fails_unknown_modes() {
        let registry = registry(UnknownModePolicy::Reject);
        assert_eq!(
            registry.resolve("compiler"),
            Err(SubmitError::UnknownMode("compiler".to_string()))
        );
    }

    #[test]
    fn fallback_policy_routes_unknown_modes_to_fallback() {
        let registry = registry(UnknownModePolicy::Fallback);
        assert_eq!(registry.resolve("compiler"), Ok(&endpoint("lexer")));
    }

    #[test]
    fn lists_configured_modes_in_ui_order() {
        let registry = registry(UnknownModePolicy::Reject);
        assert_eq!(registry.modes(), ProcessingMode::ALL.to_vec());
    }
}
