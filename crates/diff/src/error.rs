use derive_more::Display;

/// Errors reported by the pre-flight checks of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DiffError {
    /// The LCS table for this pair would exceed the configured cell limit
    #[display(
        fmt = "comparison needs {} table cells, the configured limit is {}",
        cells,
        limit
    )]
    TooLarge { cells: usize, limit: usize },
}

impl std::error::Error for DiffError {}
