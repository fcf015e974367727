/// When a [`Tree`][crate::Tree] restores its balance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RebalancePolicy {
    /// Only an explicit call to [`Tree::rebalance`][crate::Tree::rebalance] rebuilds the tree.
    /// Inserts and deletes stay cheap and the tree may drift out of balance in between.
    #[default]
    Manual,
    /// Any insert or delete that leaves the tree unbalanced is followed by a rebalance, so
    /// [`Tree::is_balanced`][crate::Tree::is_balanced] always holds.
    OnMutation,
}

/// Settings for a [`Tree`][crate::Tree].
///
/// # Examples
///
/// ```
/// use balanced_bst::{Config, RebalancePolicy, Tree};
///
/// let config = Config::default().rebalance(RebalancePolicy::OnMutation);
/// let mut tree = Tree::build_with([1], config).unwrap();
///
/// for key in 2..100 {
///     tree.insert(key);
///     assert!(tree.is_balanced());
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    policy: RebalancePolicy,
}

impl Config {
    /// Returns this configuration with the given rebalance policy.
    pub fn rebalance(self, policy: RebalancePolicy) -> Self {
        Self { policy }
    }

    /// The configured rebalance policy.
    pub fn policy(&self) -> RebalancePolicy {
        self.policy
    }
}
