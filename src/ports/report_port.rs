//! Report sink port.

use crate::domain::error::EqWeightError;
use crate::domain::quote::Position;

/// Port for persisting the recommended trades table.
pub trait ReportPort {
    /// Writes every position, in order, as one complete document.
    fn write(&self, positions: &[Position]) -> Result<(), EqWeightError>;

    /// Where the document ends up, for progress messages.
    fn destination(&self) -> String;
}
