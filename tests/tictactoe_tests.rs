//! Tic-Tac-Toe integration tests: win detection, optimal play, outcome reporting.

use std::time::SystemTime;

use rust_parlor::core::{report_transition, GameKind, GameOutcome, GameResult};
use rust_parlor::stats::StatsBook;
use rust_parlor::tictactoe::{select_move, Board, Mark, TicTacToeState, LINES};

// =============================================================================
// Win Detection
// =============================================================================

/// Each winning line, filled with one mark and nothing else, wins for that mark.
#[test]
fn test_each_line_wins_through_state_machine() {
    for line in LINES {
        // O answers on cells off the line; two O marks can never win.
        let mut o_moves = (0..9).filter(|i| !line.contains(i));
        let mut state = TicTacToeState::initial();

        for (n, &x) in line.iter().enumerate() {
            state = state.apply_move(x);
            if n < 2 {
                state = state.apply_move(o_moves.next().unwrap());
            }
        }

        assert_eq!(state.winner, Some(Mark::X), "line {line:?}");
        assert!(state.game_over);
        assert!(!state.is_draw);
    }
}

/// Terminal states absorb every further move.
#[test]
fn test_no_moves_after_game_over() {
    let won = [0, 3, 1, 4, 2]
        .iter()
        .fold(TicTacToeState::initial(), |s, &i| s.apply_move(i));
    for i in 0..9 {
        assert_eq!(won.apply_move(i), won);
    }
}

// =============================================================================
// AI Optimality
// =============================================================================

/// Explore every X line of play against the AI; X never wins.
fn explore(state: TicTacToeState, leaves: &mut usize) {
    if state.game_over {
        assert_ne!(state.winner, Some(Mark::X), "AI lost:\n{}", state.board);
        *leaves += 1;
        return;
    }

    match state.current_player {
        Mark::X => {
            for index in state.board.available_moves().collect::<Vec<_>>() {
                explore(state.apply_move(index), leaves);
            }
        }
        Mark::O => {
            let reply = select_move(&state.board).expect("O has a move in a live game");
            explore(state.apply_move(reply), leaves);
        }
    }
}

#[test]
fn test_ai_never_loses_to_any_x_strategy() {
    let mut leaves = 0;
    explore(TicTacToeState::initial(), &mut leaves);
    assert!(leaves > 0);
}

/// Optimal X against the AI from the empty board: always a draw.
#[test]
fn test_optimal_self_play_draws() {
    // X plays the mirror of the AI's search: best move for X by minimax,
    // obtained by swapping the marks on the board and asking the O engine.
    fn swap(board: &Board) -> Board {
        let cells: String = board
            .cells()
            .iter()
            .map(|c| match c {
                Some(Mark::X) => 'O',
                Some(Mark::O) => 'X',
                None => '.',
            })
            .collect();
        Board::from_str_cells(&cells)
    }

    let mut state = TicTacToeState::initial();
    while !state.game_over {
        let index = match state.current_player {
            Mark::X => select_move(&swap(&state.board)),
            Mark::O => select_move(&state.board),
        }
        .unwrap();
        state = state.apply_move(index);
    }

    assert!(state.is_draw);
    assert_eq!(state.result(), Some(GameResult::Draw));
}

#[test]
fn test_select_move_is_deterministic() {
    let board = Board::from_str_cells("X...O...X");
    assert_eq!(select_move(&board), select_move(&board));
}

// =============================================================================
// Outcome Reporting
// =============================================================================

#[test]
fn test_outcome_recorded_once_on_game_over() {
    let mut book = StatsBook::new();
    let mut sink: Vec<GameOutcome> = Vec::new();
    let now = SystemTime::now();

    let mut state = TicTacToeState::initial();
    for index in [0, 3, 1, 4, 2, 5] {
        let next = state.apply_move(index);
        report_transition(&state, &next, now, &mut book);
        report_transition(&state, &next, now, &mut sink);
        state = next;
    }

    assert_eq!(sink, vec![GameOutcome::new(GameKind::TicTacToe, GameResult::Win)]);
    let stat = book.get(GameKind::TicTacToe);
    assert_eq!(stat.games_played, 1);
    assert_eq!(stat.wins, 1);
}

#[test]
fn test_ai_win_is_a_loss_for_the_player() {
    // X wastes moves; O completes the middle column.
    let state = [0, 1, 2, 4, 3]
        .iter()
        .fold(TicTacToeState::initial(), |s, &i| s.apply_move(i));
    let reply = select_move(&state.board).unwrap();
    let state = state.apply_move(reply);

    assert_eq!(reply, 7);
    assert_eq!(state.winner, Some(Mark::O));
    assert_eq!(state.result(), Some(GameResult::Loss));
}
