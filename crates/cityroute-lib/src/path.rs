use crate::error::{Error, Result};
use crate::graph::CityId;

/// Walk `predecessors` back from `destination` to `source` and return the
/// route in travel order, both endpoints included.
///
/// A walk that runs out of predecessors before reaching `source` yields
/// [`Error::Unreachable`]; no partial path is ever returned. A chain longer
/// than the predecessor map can only come from a cycle and is reported as
/// [`Error::PredecessorCycle`].
pub fn reconstruct_path(
    source: CityId,
    destination: CityId,
    predecessors: &[Option<CityId>],
) -> Result<Vec<CityId>> {
    let mut path = vec![destination];
    let mut current = destination;

    while current != source {
        let Some(previous) = predecessors.get(current).copied().flatten() else {
            return Err(Error::Unreachable {
                from: source,
                to: destination,
            });
        };
        path.push(previous);
        if path.len() > predecessors.len() {
            return Err(Error::PredecessorCycle { destination });
        }
        current = previous;
    }

    path.reverse();
    Ok(path)
}
