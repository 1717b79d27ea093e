//! Hierarchical test identities addressed by runner notifications.

use std::fmt;

/// Identity of one node in the runner's test tree.
///
/// A description is an ordered path of names from the root (usually the
/// feature) down to the node itself.
///
/// # Examples
///
/// ```
/// use scenario_notify::Description;
///
/// let scenario = Description::new("features/bank.feature").child("Withdraw cash");
/// let step = scenario.child("Given an account with 100");
/// assert_eq!(step.display_name(), "Given an account with 100");
/// assert!(step.is_descendant_of(&scenario));
/// assert_eq!(
///     scenario.to_string(),
///     "features/bank.feature > Withdraw cash"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Description {
    segments: Vec<String>,
}

impl Description {
    /// Creates a root description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Creates the description of a child node.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name.into());
        Self { segments }
    }

    /// Returns the name of this node without its ancestors.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns every name from the root down to this node.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` when `ancestor` is a strict prefix of this description.
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Self) -> bool {
        self.segments.len() > ancestor.segments.len()
            && self.segments.starts_with(&ancestor.segments)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(" > "))
    }
}
