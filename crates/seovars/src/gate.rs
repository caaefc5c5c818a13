//! Commerce capability gate.
//!
//! Commerce taxonomies and product content classify as such only while the
//! commerce plugin is active. The resolver does not know how plugin status is
//! tracked; it probes an injected gate at call time and never caches the
//! answer, so flipping the gate changes the very next classification.

use std::collections::HashSet;

/// Machine name of the commerce plugin.
pub const COMMERCE_PLUGIN: &str = "commerce";

/// Capability probe for the commerce plugin.
pub trait CommerceGate {
    /// Whether the commerce plugin is currently active.
    fn commerce_active(&self) -> bool;
}

/// A fixed answer. Useful for tests and for hosts that resolve plugin
/// status once per request.
impl CommerceGate for bool {
    fn commerce_active(&self) -> bool {
        *self
    }
}

/// A live probe wrapping a closure. The closure is invoked on every
/// classification that needs the answer.
#[derive(Debug, Clone)]
pub struct Probe<F>(pub F);

impl<F> CommerceGate for Probe<F>
where
    F: Fn() -> bool,
{
    fn commerce_active(&self) -> bool {
        (self.0)()
    }
}

impl<G: CommerceGate + ?Sized> CommerceGate for &G {
    fn commerce_active(&self) -> bool {
        (**self).commerce_active()
    }
}

/// Set of enabled plugin machine names.
///
/// Answers the gate by membership of [`COMMERCE_PLUGIN`], matching how the
/// host gates plugin-provided behavior on plugin status.
#[derive(Debug, Clone, Default)]
pub struct EnabledPlugins {
    names: HashSet<String>,
}

impl EnabledPlugins {
    /// Build from an iterator of enabled plugin names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark a plugin as enabled.
    pub fn enable(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    /// Mark a plugin as disabled.
    pub fn disable(&mut self, name: &str) {
        self.names.remove(name);
    }

    /// Whether the named plugin is enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl CommerceGate for EnabledPlugins {
    fn commerce_active(&self) -> bool {
        self.is_enabled(COMMERCE_PLUGIN)
    }
}
