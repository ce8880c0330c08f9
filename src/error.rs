use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid tcp check config: {0}")]
    InvalidCheckConfig(String),
    #[error("port specification `{spec}` is not resolvable for process `{process}`")]
    InvalidPortSpec { spec: String, process: String },
    #[error("could not connect to port {0} on any of the local addresses")]
    Unreachable(u16),
    #[error("probe failed unexpectedly: {0}")]
    Io(#[source] std::io::Error),
}
