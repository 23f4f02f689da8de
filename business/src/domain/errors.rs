/// Port-level errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service.request")]
    Request,
    #[error("service.decode")]
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.read")]
    Read,
    #[error("store.write")]
    Write,
}
