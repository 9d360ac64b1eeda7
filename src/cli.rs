//! Command-line arguments

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

const AFTER_HELP: &str = "\
Syntax:
    kubectl imageof POD_NAME -n NAMESPACE
    kubectl imageof -A -n NAMESPACE

Output:
    CONTAINER: IMAGE

Examples:
    $ kubectl imageof redis -n redis
    redis: redis

    $ kubectl imageof redis -n redis -v
    Pod redis:
      redis: redis

    $ kubectl imageof -A -n harbor
    Pod: harbor-core-75dd796d56-8gpld
      core: goharbor/harbor-core:v2.13.2
    Pod: harbor-registry-565b4b6c6c-wx9vn
      registry: goharbor/registry-photon:v2.13.2
      registryctl: goharbor/harbor-registryctl:v2.13.2

    $ kubectl imageof -A -n harbor -t
    Pod: harbor-core-75dd796d56-8gpld
    └──core: goharbor/harbor-core:v2.13.2";

/// kubectl-imageof - Quickly retrieve the image(s) of pod(s) instead of
/// grepping them out of the description
#[derive(Parser, Debug)]
#[command(name = "kubectl-imageof")]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Name of the pod
    #[arg(value_name = "POD_NAME")]
    pub pod_name: Option<String>,

    /// Namespace of the pod(s)
    #[arg(
        short,
        long,
        value_name = "NAMESPACE",
        default_value = "default",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub namespace: String,

    /// List images of all pods in the namespace
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Show pod name in output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show tree view for multiple pods
    #[arg(short, long)]
    pub tree: bool,
}

/// What a single invocation should report
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Single { pod: String, verbose: bool },
    All { tree: bool },
}

/// Validated arguments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub namespace: String,
    pub mode: Mode,
}

impl Args {
    /// Resolve the flags into exactly one reporting mode
    pub fn into_invocation(self) -> Result<Invocation, clap::Error> {
        if self.verbose && self.all {
            tracing::debug!("--verbose has no effect with --all");
        }
        if self.tree && !self.all {
            tracing::debug!("--tree has no effect for a single pod");
        }

        let mode = match (self.all, self.pod_name) {
            (true, None) => Mode::All { tree: self.tree },
            (false, Some(pod)) => Mode::Single {
                pod,
                verbose: self.verbose,
            },
            (true, Some(_)) => {
                return Err(Self::command().error(
                    ErrorKind::ArgumentConflict,
                    "POD_NAME cannot be used with --all",
                ));
            }
            (false, None) => {
                return Err(Self::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "either POD_NAME or --all is required",
                ));
            }
        };

        Ok(Invocation {
            namespace: self.namespace,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, clap::Error> {
        let argv = std::iter::once("kubectl-imageof").chain(args.iter().copied());
        Args::try_parse_from(argv)?.into_invocation()
    }

    #[test]
    fn test_single_pod_defaults() {
        let inv = parse(&["redis"]).unwrap();
        assert_eq!(inv.namespace, "default");
        assert_eq!(
            inv.mode,
            Mode::Single {
                pod: "redis".to_string(),
                verbose: false
            }
        );
    }

    #[test]
    fn test_single_pod_verbose_with_namespace() {
        let inv = parse(&["redis", "-n", "redis", "-v"]).unwrap();
        assert_eq!(inv.namespace, "redis");
        assert_eq!(
            inv.mode,
            Mode::Single {
                pod: "redis".to_string(),
                verbose: true
            }
        );
    }

    #[test]
    fn test_all_pods_long_flags() {
        let inv = parse(&["--all", "--namespace", "harbor", "--tree"]).unwrap();
        assert_eq!(inv.namespace, "harbor");
        assert_eq!(inv.mode, Mode::All { tree: true });
    }

    #[test]
    fn test_all_pods_short_flags() {
        let inv = parse(&["-A", "-n", "harbor"]).unwrap();
        assert_eq!(inv.mode, Mode::All { tree: false });
    }

    #[test]
    fn test_pod_name_with_all_is_usage_error() {
        let err = parse(&["redis", "-A"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert!(err.to_string().contains("POD_NAME cannot be used with --all"));
        assert!(err.use_stderr());
    }

    #[test]
    fn test_neither_pod_name_nor_all_is_usage_error() {
        let err = parse(&["-n", "redis"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("either POD_NAME or --all is required"));
        assert!(err.use_stderr());
    }

    #[test]
    fn test_two_pod_names_is_usage_error() {
        assert!(parse(&["redis", "nginx"]).is_err());
    }

    #[test]
    fn test_empty_namespace_is_rejected() {
        let err = parse(&["redis", "-n", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }
}
