use thiserror::Error;

/// Errors raised while building the client or querying pods
#[derive(Debug, Error)]
pub enum KubeError {
    #[error("HOME is not set, cannot locate kubeconfig")]
    NoHomeDir,

    #[error(transparent)]
    ReadKubeconfig(kube::config::KubeconfigError),

    #[error("failed to load client configuration from kubeconfig")]
    Config(#[source] kube::config::KubeconfigError),

    #[error("failed to create Kubernetes client")]
    Client(#[source] kube::Error),

    #[error("pod '{name}' not found in namespace '{namespace}'")]
    NotFound {
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("error retrieving pod '{name}' in namespace '{namespace}'")]
    Get {
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("error listing pods in namespace '{namespace}'")]
    List {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

impl KubeError {
    /// Classify a failed get-by-name, splitting out 404 responses
    pub(crate) fn from_get(name: &str, namespace: &str, source: kube::Error) -> Self {
        let name = name.to_string();
        let namespace = namespace.to_string();
        if matches!(&source, kube::Error::Api(response) if response.code == 404) {
            Self::NotFound {
                name,
                namespace,
                source,
            }
        } else {
            Self::Get {
                name,
                namespace,
                source,
            }
        }
    }
}
