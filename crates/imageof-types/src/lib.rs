//! Shared types for kubectl-imageof
//!
//! This crate contains the data structures passed between the Kubernetes
//! client and the image reporter.

// ============================================================================
// Kubernetes Resource Types
// ============================================================================

/// A pod and the containers it declares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadInstance {
    pub name: String,
    pub namespace: String,
    /// Containers in the order the API returned them
    pub containers: Vec<ContainerSpec>,
}

impl WorkloadInstance {
    pub fn new(name: String, namespace: String) -> Self {
        Self {
            name,
            namespace,
            containers: Vec::new(),
        }
    }

    /// Builder-style helper to append a container
    pub fn with_container(mut self, container: ContainerSpec) -> Self {
        self.containers.push(container);
        self
    }
}

/// A named container and its image reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    /// Opaque image reference, e.g. `goharbor/harbor-core:v2.13.2`
    pub image: String,
}

impl ContainerSpec {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}
