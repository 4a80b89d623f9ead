#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    CatalogIo(String),
    CatalogFormat(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::CatalogIo(msg) => {
                write!(f, "Catalog file error: {}", msg)
            }
            DomainError::CatalogFormat(msg) => {
                write!(f, "Invalid catalog format: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
