//! Kubernetes client for kubectl-imageof

use std::ffi::OsString;
use std::future::Future;
use std::path::{Path, PathBuf};

use k8s_openapi::api::core::v1::Pod;
use kube::Api;
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

use crate::error::KubeError;
use imageof_types::{ContainerSpec, WorkloadInstance};

/// Read-only pod queries used by the reporter
pub trait PodSource {
    /// Fetch a single pod by name
    fn get_instance(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = Result<WorkloadInstance, KubeError>>;

    /// Fetch every pod in a namespace, in API order
    fn list_instances(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<WorkloadInstance>, KubeError>>;
}

/// Kubernetes client wrapper
pub struct KubeClient {
    client: kube::Client,
}

/// Location of the kubeconfig: `$HOME/.kube/config`
pub fn kubeconfig_path() -> Result<PathBuf, KubeError> {
    kubeconfig_path_from(std::env::var_os("HOME"))
}

fn kubeconfig_path_from(home: Option<OsString>) -> Result<PathBuf, KubeError> {
    let home = home
        .filter(|h| !h.is_empty())
        .ok_or(KubeError::NoHomeDir)?;
    Ok(PathBuf::from(home).join(".kube").join("config"))
}

impl KubeClient {
    /// Create a new KubeClient from the current context of `$HOME/.kube/config`
    pub async fn new() -> Result<Self, KubeError> {
        Self::from_kubeconfig_path(&kubeconfig_path()?).await
    }

    /// Create a KubeClient from the current context of the kubeconfig at `path`
    async fn from_kubeconfig_path(path: &Path) -> Result<Self, KubeError> {
        debug!("loading kubeconfig from {}", path.display());

        let kubeconfig = Kubeconfig::read_from(path).map_err(KubeError::ReadKubeconfig)?;
        debug!(
            context = kubeconfig.current_context.as_deref().unwrap_or("<none>"),
            "using kubeconfig context"
        );

        let config =
            kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(KubeError::Config)?;

        let client = kube::Client::try_from(config).map_err(KubeError::Client)?;

        Ok(Self { client })
    }

    /// Fetch a single pod by name
    pub async fn get_pod(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadInstance, KubeError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        debug!(namespace, name, "getting pod");
        let pod = pods
            .get(name)
            .await
            .map_err(|e| KubeError::from_get(name, namespace, e))?;

        Ok(pod_to_instance(pod, namespace))
    }

    /// Fetch all pods in a namespace
    pub async fn list_pods(&self, namespace: &str) -> Result<Vec<WorkloadInstance>, KubeError> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        debug!(namespace, "listing pods");
        let list = pods
            .list(&ListParams::default())
            .await
            .map_err(|source| KubeError::List {
                namespace: namespace.to_string(),
                source,
            })?;
        debug!(namespace, count = list.items.len(), "listed pods");

        Ok(list
            .items
            .into_iter()
            .map(|pod| pod_to_instance(pod, namespace))
            .collect())
    }
}

impl PodSource for KubeClient {
    async fn get_instance(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<WorkloadInstance, KubeError> {
        self.get_pod(namespace, name).await
    }

    async fn list_instances(&self, namespace: &str) -> Result<Vec<WorkloadInstance>, KubeError> {
        self.list_pods(namespace).await
    }
}

/// Convert a k8s Pod to a WorkloadInstance
///
/// Only regular containers are kept; init and ephemeral containers are not
/// part of the report.
pub fn pod_to_instance(pod: Pod, namespace: &str) -> WorkloadInstance {
    let name = pod.metadata.name.unwrap_or_default();
    let namespace = pod
        .metadata
        .namespace
        .unwrap_or_else(|| namespace.to_string());
    let mut instance = WorkloadInstance::new(name, namespace);

    let containers = pod.spec.map(|spec| spec.containers).unwrap_or_default();
    for c in containers {
        let image = c.image.unwrap_or_default();
        instance = instance.with_container(ContainerSpec::new(c.name, image));
    }

    instance
}
