/// Errors raised by repository lookups that carry their own emptiness policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The scan matched zero records for the requested predicate.
    #[error("No vehicles were found for the provided criteria")]
    NotFound,
}

/// Errors surfaced by the vehicle service to the handler layer.
///
/// Repository errors pass through unchanged in meaning; the `repository:`
/// prefix only classifies where they originated. [`ServiceError::NoVehicles`]
/// is raised by the service itself when a repository call that never signals
/// absence comes back empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),

    #[error("service: no vehicles")]
    NoVehicles,
}
