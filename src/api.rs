//! Puzzle-level entry point tying the grid, operator, and solver together.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::effect::{effect_matrix, target_vector};
use crate::error::Error;
use crate::grid::SecureBox;
use crate::moves::{collect_moves, Move};
use crate::solver::solve_linear_system;

/// An ordered move list driving a box to the all-zero state, plus whether
/// the underlying linear system was full rank. Rank-deficient plans still
/// unlock every grid produced by scrambling; only states unreachable by
/// toggles can defeat them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvePlan {
    pub moves: Vec<Move>,
    pub full_rank: bool,
}

/// Computes the toggle sequence that unlocks `grid`. The grid is read
/// through a snapshot and never mutated; replaying the plan is the
/// caller's job.
pub fn solve(grid: &SecureBox) -> Result<SolvePlan, Error> {
    let width = grid.width();
    let height = grid.height();

    let effect = effect_matrix(width, height);
    let target = target_vector(&grid.state());
    let solution = solve_linear_system(&effect, &target)?;
    let moves = collect_moves(&solution.counts, width, height);

    debug!(
        "solve plan for {width}x{height}: {} moves, full rank {}",
        moves.len(),
        solution.full_rank
    );

    Ok(SolvePlan {
        moves,
        full_rank: solution.full_rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_vec_mul;
    use crate::rng::KeystreamRng;
    use crate::types::{Trit, TritMatrix};

    fn replay(grid: &mut SecureBox, plan: &SolvePlan) {
        for mv in &plan.moves {
            for _ in 0..mv.count {
                grid.toggle(mv.x, mv.y);
            }
        }
    }

    #[test]
    fn test_unlocked_box_yields_empty_plan() {
        let grid = SecureBox::new(3, 3);
        let plan = solve(&grid).unwrap();
        assert!(plan.moves.is_empty());
        assert!(plan.full_rank);
    }

    #[test]
    fn test_single_cell_box() {
        // Two toggles leave the one cell fully locked; one more unlocks it
        let mut grid = SecureBox::new(1, 1);
        grid.toggle(0, 0);
        grid.toggle(0, 0);

        let plan = solve(&grid).unwrap();
        assert_eq!(plan.moves, vec![Move { x: 0, y: 0, count: 1 }]);
        assert!(plan.full_rank);

        replay(&mut grid, &plan);
        assert!(!grid.is_locked());
    }

    #[test]
    fn test_two_by_two_reachable_state_unlocks() {
        // The 2×2 operator is rank 3 of 4, yet every state reached by
        // toggling stays solvable
        let mut grid = SecureBox::new(2, 2);
        grid.toggle(0, 0);

        let plan = solve(&grid).unwrap();
        assert!(!plan.full_rank);
        assert_eq!(plan.moves, vec![Move { x: 0, y: 0, count: 2 }]);

        replay(&mut grid, &plan);
        assert!(!grid.is_locked());
    }

    #[test]
    fn test_single_row_fully_locked_unlocks() {
        // 3×1 grid: one toggle raises the whole row, so two toggles lock
        // every cell fully and a single further toggle opens the box
        let mut grid = SecureBox::new(3, 1);
        grid.toggle(0, 0);
        grid.toggle(0, 0);
        assert!(grid.state().data.iter().all(|cell| cell.0 == 2));

        let plan = solve(&grid).unwrap();
        assert!(!plan.full_rank);
        assert_eq!(plan.moves, vec![Move { x: 0, y: 0, count: 1 }]);

        replay(&mut grid, &plan);
        assert!(!grid.is_locked());
    }

    #[test]
    fn test_unreachable_state_defeats_the_plan() {
        // A lone partially-locked cell cannot be produced by toggles (each
        // toggle changes the cell sum by 0 mod 3). The plan the solver
        // hands back fails to reproduce the target, and the flag is the
        // only trace of the problem.
        let effect = effect_matrix(2, 2);
        let state = TritMatrix::new_with_data(2, 2, vec![Trit(1), Trit(0), Trit(0), Trit(0)]);
        let target = target_vector(&state);

        let solution = solve_linear_system(&effect, &target).unwrap();
        assert!(!solution.full_rank);
        assert_ne!(matrix_vec_mul(&effect, &solution.counts).unwrap(), target);
    }

    #[test]
    fn test_scramble_solve_replay_unlocks() {
        // (width, height, operator has full rank)
        let dims = [
            (1, 1, true),
            (2, 2, false),
            (3, 2, true),
            (3, 3, true),
            (4, 3, false),
            (5, 4, false),
            (10, 10, false),
        ];
        let mut rng = KeystreamRng::from_seed(&[7u8; 16]);
        for (width, height, full_rank) in dims {
            let mut grid = SecureBox::scrambled(width, height, &mut rng);
            let plan = solve(&grid).unwrap();
            assert_eq!(plan.full_rank, full_rank, "rank flag for {}x{}", width, height);
            replay(&mut grid, &plan);
            assert!(!grid.is_locked(), "box still locked for {}x{}", width, height);
        }
    }

    #[test]
    fn test_plan_survives_json() {
        let plan = SolvePlan {
            moves: vec![Move { x: 2, y: 1, count: 1 }],
            full_rank: true,
        };
        let encoded = serde_json::to_string(&plan).unwrap();
        assert_eq!(serde_json::from_str::<SolvePlan>(&encoded).unwrap(), plan);
    }
}
