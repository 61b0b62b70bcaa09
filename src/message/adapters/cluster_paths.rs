//! Cluster-scoped path layout for message keys.

use crate::message::{
    domain::MessageId,
    ports::key_builder::{KeyBuilder, PropertyKey},
};

/// Builds message paths rooted at one cluster.
///
/// Controller messages live under `/{cluster}/CONTROLLER/MESSAGES` and
/// participant messages under `/{cluster}/INSTANCES/{instance}/MESSAGES`.
///
/// # Examples
///
/// ```
/// use cluster_message::message::adapters::ClusterKeyBuilder;
/// use cluster_message::message::domain::MessageId;
/// use cluster_message::message::ports::KeyBuilder;
///
/// let builder = ClusterKeyBuilder::new("ESPRESSO");
/// let key = builder.message("localhost_12918", &MessageId::from("m1"));
/// assert_eq!(key.as_str(), "/ESPRESSO/INSTANCES/localhost_12918/MESSAGES/m1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterKeyBuilder {
    cluster_name: String,
}

impl ClusterKeyBuilder {
    /// Creates a builder for the named cluster.
    #[must_use]
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
        }
    }

    /// Returns the cluster every path is rooted at.
    #[must_use]
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }
}

impl KeyBuilder for ClusterKeyBuilder {
    fn controller_message(&self, id: &MessageId) -> PropertyKey {
        PropertyKey::new(format!("/{}/CONTROLLER/MESSAGES/{id}", self.cluster_name))
    }

    fn message(&self, instance_name: &str, id: &MessageId) -> PropertyKey {
        PropertyKey::new(format!(
            "/{}/INSTANCES/{instance_name}/MESSAGES/{id}",
            self.cluster_name
        ))
    }
}
