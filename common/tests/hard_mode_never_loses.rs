use common::games::SessionRng;
use common::games::tictactoe::{
    Board, Difficulty, Mark, MoveOutcome, TicTacToeGameState, calculate_minimax_move,
    calculate_minimax_move_for, calculate_move, minimax,
};

/// Plays every X move sequence against hard-mode O, counting
/// (games, o_wins, draws) into `stats`. Panics if X ever wins.
fn explore_all_x_strategies(board: &Board, stats: &mut (u32, u32, u32)) {
    for pos in board.empty_cells() {
        let mut next = *board;
        next.place(pos.row, pos.col, Mark::X).unwrap();

        assert!(next.winner() != Some(Mark::X), "X won on\n{}", next);
        if next.is_full() {
            stats.0 += 1;
            stats.2 += 1;
            continue;
        }

        let reply = calculate_minimax_move(&next).unwrap();
        next.place(reply.row, reply.col, Mark::O).unwrap();

        if next.winner() == Some(Mark::O) {
            stats.0 += 1;
            stats.1 += 1;
        } else if next.is_full() {
            stats.0 += 1;
            stats.2 += 1;
        } else {
            explore_all_x_strategies(&next, stats);
        }
    }
}

#[test]
fn test_hard_mode_never_loses_to_any_x_strategy() {
    let mut stats = (0, 0, 0);

    explore_all_x_strategies(&Board::new(), &mut stats);

    let (games, o_wins, draws) = stats;
    assert_eq!(games, o_wins + draws);
    assert!(o_wins > 0);
    assert!(draws > 0);
}

#[test]
fn test_minimax_x_against_hard_o_is_always_a_draw() {
    let mut board = Board::new();
    let mut mark = Mark::X;

    while board.winner().is_none() && !board.is_full() {
        let pos = match mark {
            Mark::X => calculate_minimax_move_for(&board, Mark::X),
            _ => calculate_minimax_move(&board),
        }
        .unwrap();
        board.place(pos.row, pos.col, mark).unwrap();
        mark = mark.opponent().unwrap();
    }

    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}

#[test]
fn test_hard_session_against_random_x_never_loses() {
    let mut x_rng = SessionRng::new(2024);
    let mut o_rng = SessionRng::new(7);
    let mut state = TicTacToeGameState::new(Difficulty::Hard);

    while state.score().games_played() < 50 {
        let pos = calculate_move(Difficulty::Easy, state.board(), &mut x_rng).unwrap();
        let outcome = state.apply_human_move(pos.row, pos.col);
        assert_ne!(outcome, MoveOutcome::Rejected);
        if outcome.is_terminal() {
            continue;
        }
        assert_ne!(state.request_computer_move(&mut o_rng), MoveOutcome::Rejected);
    }

    assert_eq!(state.score().x_wins, 0);
}

#[test]
fn test_minimax_finds_forced_loss_regardless_of_cell_order() {
    // Both sides threaten a row, X moves first.
    let mut board = Board::from_cells([
        [Mark::Empty, Mark::X, Mark::X],
        [Mark::O, Mark::Empty, Mark::O],
        [Mark::Empty, Mark::Empty, Mark::Empty],
    ]);
    let before = board;

    assert_eq!(minimax(&mut board, false), -1);
    assert_eq!(board, before);
}
