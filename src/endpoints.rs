use crate::error::MazeError;
use crate::grid::{Grid, Position};
use rand::seq::index::sample;
use rand::Rng;

/// Picks a uniformly random pair of distinct passable positions.
///
/// The caller supplies the generator, so a seeded `StdRng` gives
/// reproducible endpoints.
pub fn select_endpoints<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<(Position, Position), MazeError> {
    let candidates = grid.passable_positions();
    if candidates.len() < 2 {
        return Err(MazeError::NotEnoughPassableCells {
            found: candidates.len(),
        });
    }

    let picks = sample(rng, candidates.len(), 2);
    Ok((candidates[picks.index(0)], candidates[picks.index(1)]))
}
