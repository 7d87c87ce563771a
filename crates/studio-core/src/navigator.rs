use crate::error::{Result, StudioError};
use crate::phase::Phase;

/// The phase numbered exactly `number`. With duplicates, the first one wins.
pub fn find_phase(phases: &[Phase], number: u32) -> Result<&Phase> {
    phases
        .iter()
        .find(|p| p.number == number)
        .ok_or(StudioError::UnknownPhase(number))
}

/// The phase to work on next.
///
/// Without `after` this is the lowest-numbered phase; with it, the lowest
/// phase numbered strictly greater than `after`. Input order does not matter.
pub fn next_phase(phases: &[Phase], after: Option<u32>) -> Result<&Phase> {
    let mut ordered: Vec<&Phase> = phases.iter().collect();
    ordered.sort_by_key(|p| p.number);

    match after {
        None => ordered.first().copied().ok_or(StudioError::NoPhases),
        Some(after) => ordered
            .into_iter()
            .find(|p| p.number > after)
            .ok_or(StudioError::NoPhaseAfter(after)),
    }
}
