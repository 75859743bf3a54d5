use crate::crossings::NUM_CROSSINGS;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TorusError {
    /// The crossing search did not resolve the expected topology. The chosen
    /// radii no longer produce two ellipses meeting at exactly
    /// [`NUM_CROSSINGS`] points; nothing downstream is meaningful, so the run
    /// aborts.
    #[error("Expected exactly {NUM_CROSSINGS} crossings between the band center-lines, found {found}")]
    CrossingCount { found: usize },
}
