use crate::domain::model::ResolvedPlace;

/// Lookup capability the validator needs from a location table. The
/// table is loaded by the application before validation begins and is
/// never mutated afterwards, so implementations only expose reads.
pub trait LocationLookup: Send + Sync {
    /// Resolves a 4-character place code (1 letter + 3 digits),
    /// municipality namespace first, then foreign countries.
    fn resolve(&self, code: &str) -> Option<ResolvedPlace>;
}
