/// How the chart's grouping is expressed, which decides the top-query
/// variant requested from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// A plain dimension grouping.
    Dimension,
    /// An aggregated group (measure over a grouping key).
    Aggregated,
}

/// Supplies the capped top-N SQL for a render cycle.
///
/// The chart selects the query variant from [`QueryKind`] but never
/// interprets the SQL it gets back.
pub trait QuerySource {
    fn kind(&self) -> QueryKind;

    fn build_top_query(&self, row_limit: usize, is_dimension: bool, is_aggregated: bool) -> String;
}
