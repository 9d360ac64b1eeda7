//! Kubernetes client for kubectl-imageof
//!
//! This crate provides the two pod queries the tool needs: fetching a pod
//! by name and listing the pods of a namespace.

mod client;
mod error;

pub use client::{KubeClient, PodSource, kubeconfig_path, pod_to_instance};
pub use error::KubeError;

// Re-export types that are used in our public API
pub use imageof_types::{ContainerSpec, WorkloadInstance};
