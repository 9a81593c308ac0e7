//! RuleSet - The rules a caller asked for

use std::collections::BTreeSet;

use super::RuleName;

/// Caller-requested rules.
///
/// Explicit requests and the `auto_optimize` sentinel are kept as separate
/// questions; the pipeline combines them per rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeSet<RuleName>,
}

impl RuleSet {
    /// No rules at all: the engine passes the prompt through untouched.
    pub fn empty() -> Self {
        Self {
            rules: BTreeSet::new(),
        }
    }

    /// Parse wire names, skipping anything outside the closed set.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| match name.as_ref().parse::<RuleName>() {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::debug!("Ignoring rule: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Whether the caller named this rule.
    pub fn is_requested(&self, rule: RuleName) -> bool {
        self.rules.contains(&rule)
    }

    /// Whether the caller asked the analysis to pick rules.
    pub fn auto_optimize(&self) -> bool {
        self.is_requested(RuleName::AutoOptimize)
    }

    /// Gate for one pipeline step: requested, or implied while auto-optimizing.
    pub fn activates(&self, rule: RuleName, implied: bool) -> bool {
        self.is_requested(rule) || (implied && self.auto_optimize())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.rules.iter().copied()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        [RuleName::AutoOptimize].into_iter().collect()
    }
}

impl FromIterator<RuleName> for RuleSet {
    fn from_iter<T: IntoIterator<Item = RuleName>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
