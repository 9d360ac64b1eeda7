//! Text rendering of pod images
//!
//! Every line rendered here is `CONTAINER: IMAGE`, optionally preceded by a
//! pod header and an indent or branch glyph.

use std::fmt::Write;

use imageof_types::{ContainerSpec, WorkloadInstance};

/// Indent used under a pod header
const INDENT: &str = "  ";

/// Branch glyph used in tree view
const TREE_BRANCH: &str = "└──";

/// Render the images of a single pod.
///
/// With `verbose` the output starts with a `Pod <name>:` header and the
/// container lines are indented beneath it.
pub fn report_one(pod: &WorkloadInstance, verbose: bool) -> String {
    let mut out = String::new();
    let prefix = if verbose {
        let _ = writeln!(out, "Pod {}:", pod.name);
        INDENT
    } else {
        ""
    };

    for container in &pod.containers {
        push_container(&mut out, prefix, container);
    }
    out
}

/// Render the images of every pod in a namespace, in the order given.
pub fn report_all(namespace: &str, pods: &[WorkloadInstance], tree_view: bool) -> String {
    let mut out = String::new();
    if pods.is_empty() {
        let _ = writeln!(out, "No pods found in namespace {}", namespace);
        return out;
    }

    let prefix = if tree_view { TREE_BRANCH } else { INDENT };
    for pod in pods {
        let _ = writeln!(out, "Pod: {}", pod.name);
        for container in &pod.containers {
            push_container(&mut out, prefix, container);
        }
    }
    out
}

fn push_container(out: &mut String, prefix: &str, container: &ContainerSpec) {
    let _ = writeln!(out, "{}{}: {}", prefix, container.name, container.image);
}
