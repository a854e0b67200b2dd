/// Policy for annotation names that have no registered factory.
///
/// Only governs the unknown-name case; parameter and compatibility errors
/// always propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Fail with `UnknownLogicalType` (default).
    #[default]
    Strict,
    /// Treat the schema as carrying no logical type.
    Lenient,
}
