/// Store failure. Absence of a record is not an error; repositories return
/// `Ok(None)` for that.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RepoError {
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }
}
