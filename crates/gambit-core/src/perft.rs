//! Perft (performance test) for move generation correctness verification.
//!
//! Counts leaf nodes of the legal move tree with strict alternation. Without
//! castling, en passant, or promotion the figures agree with standard chess up to
//! depth 4 from the starting position, since none of those moves occur that early.

use crate::board::Board;
use crate::color::Color;
use crate::legality::legal_moves;

/// Count the number of leaf nodes at the given depth, `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = *board;
        child.move_piece(mv);
        nodes += perft(&child, side.flip(), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, side)
        .into_iter()
        .map(|mv| {
            let mut child = *board;
            child.move_piece(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&child, side.flip(), depth - 1)
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 4), 197_281);
    }

    #[test]
    fn perft_black_first_mirrors_white() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::Black, 2), 400);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let board = Board::starting_position();
        let results = divide(&board, Color::White, 1);
        assert_eq!(results.len(), 20);
        for (_, count) in &results {
            assert_eq!(*count, 1);
        }
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let total: u64 = divide(&board, Color::White, 3).iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, Color::White, 3));
    }

    #[test]
    fn perft_mated_position_is_zero() {
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR".parse().unwrap();
        assert_eq!(perft(&board, Color::White, 1), 0);
        assert_eq!(perft(&board, Color::White, 2), 0);
    }

    #[test]
    fn perft_depth_0() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 0), 1);
    }
}
