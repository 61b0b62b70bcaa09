//! Adapters implementing the message ports.
//!
//! - [`ClusterKeyBuilder`]: cluster-scoped path layout for message keys

mod cluster_paths;

pub use cluster_paths::ClusterKeyBuilder;
