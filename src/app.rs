use anyhow::Result;
use tracing::debug;

use imageof_k8s::PodSource;
use imageof_report::{report_all, report_one};

use crate::cli::{Invocation, Mode};

/// Issue the one query the invocation calls for and render the report
pub async fn run<S: PodSource>(source: &S, invocation: &Invocation) -> Result<String> {
    let namespace = invocation.namespace.as_str();

    match &invocation.mode {
        Mode::Single { pod, verbose } => {
            let instance = source.get_instance(namespace, pod).await?;
            debug!(pod = %instance.name, containers = instance.containers.len(), "resolved pod");
            Ok(report_one(&instance, *verbose))
        }
        Mode::All { tree } => {
            let instances = source.list_instances(namespace).await?;
            Ok(report_all(namespace, &instances, *tree))
        }
    }
}
