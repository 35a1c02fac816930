//! Properties checked over every legal game, by walking the full game tree.

use strictly_tictactoe::rules::{WINNING_COMBINATIONS, check_winner};
use strictly_tictactoe::{Board, Cell, GameState, Mark, Outcome, PlaceError, Placement, Position};

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

fn check_transition(before: &GameState, pos: Position, after: &GameState) {
    let mover = *before.current_turn();

    // Exactly one cell changes, from empty to the mover's mark
    for other in Position::ALL {
        if other == pos {
            assert_eq!(before.board().get(other), Cell::Empty);
            assert_eq!(after.board().get(other), Cell::Occupied(mover));
        } else {
            assert_eq!(before.board().get(other), after.board().get(other));
        }
    }

    // Turn alternates while the game goes on, and freezes once it ends
    match *after.outcome() {
        Outcome::InProgress => assert_eq!(*after.current_turn(), mover.opponent()),
        Outcome::Won(winner) => {
            assert_eq!(winner, mover);
            assert_eq!(*after.current_turn(), mover);
        }
        Outcome::Draw => assert!(after.board().cells().iter().all(|c| *c != Cell::Empty)),
    }

    assert!(after.validate().is_ok(), "invariants hold:\n{}", after.board());
}

fn walk(state: GameState, tally: &mut Tally) {
    match *state.outcome() {
        Outcome::Won(Mark::X) => tally.x_wins += 1,
        Outcome::Won(Mark::O) => tally.o_wins += 1,
        Outcome::Draw => tally.draws += 1,
        Outcome::InProgress => explore(&state, tally),
    }
}

fn explore(state: &GameState, tally: &mut Tally) {
    let turn = *state.current_turn();
    for pos in Position::ALL {
        let placement = Placement::new(turn, pos);
        if !state.board().is_empty(pos) {
            assert_eq!(state.apply(placement), Err(PlaceError::CellOccupied(pos)));
            continue;
        }
        let next = state.apply(placement).expect("legal placement");
        check_transition(state, pos, &next);

        if next.is_over() {
            for later in Position::ALL {
                let err = next
                    .apply(Placement::new(*next.current_turn(), later))
                    .unwrap_err();
                assert_eq!(err, PlaceError::GameOver(*next.outcome()));
            }
        }

        walk(next, tally);
    }
}

#[test]
fn test_every_legal_game() {
    let mut tally = Tally::default();
    walk(GameState::new(), &mut tally);

    assert_eq!(
        tally,
        Tally {
            x_wins: 131_184,
            o_wins: 77_904,
            draws: 46_080,
        }
    );
}

#[test]
fn test_check_winner_iff_uniform_combination() {
    // Every assignment of {empty, X, O} to the 9 cells
    for code in 0..3usize.pow(9) {
        let mut cells = [Cell::Empty; 9];
        let mut rest = code;
        for cell in &mut cells {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            rest /= 3;
        }
        let board = Board::from_cells(cells);

        let uniform: Vec<Mark> = WINNING_COMBINATIONS
            .iter()
            .filter_map(|[a, b, c]| match board.get(*a) {
                Cell::Occupied(m) if board.get(*b) == board.get(*a) && board.get(*c) == board.get(*a) => {
                    Some(m)
                }
                _ => None,
            })
            .collect();

        assert_eq!(check_winner(&board), uniform.first().copied(), "\n{board}");
    }
}
