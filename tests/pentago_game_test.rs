//! Tests for the pentago game engine through the public API.

use pentago::{
    Cell, Game, GameStatus, Move, MoveError, MoveOutcome, Player, Position, Quadrant, Spin,
};

fn pos(coord: &str) -> Position {
    Position::parse(coord).expect("valid coordinate")
}

fn mv(player: Player, coord: &str, quadrant: Quadrant, spin: Spin) -> Move {
    Move::new(player, pos(coord), quadrant, spin)
}

/// Applies a move list, asserting every move is accepted and the game
/// keeps going.
fn apply_all(game: &mut Game, moves: &[Move]) {
    for mv in moves {
        assert_eq!(game.make_move(*mv), Ok(MoveOutcome::Continue), "{mv}");
    }
}

#[test]
fn test_black_moves_first() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::Black);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turns_taken(), 0);
    assert!(!game.is_full());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new();
    apply_all(
        &mut game,
        &[mv(Player::Black, "a0", Quadrant::Q4, Spin::Clockwise)],
    );
    assert_eq!(game.to_move(), Player::White);
    apply_all(
        &mut game,
        &[mv(Player::White, "f0", Quadrant::Q4, Spin::Clockwise)],
    );
    assert_eq!(game.to_move(), Player::Black);
}

#[test]
fn test_wrong_player_rejected_without_mutation() {
    let mut game = Game::new();
    let before = game.clone();

    let result = game.make_move(mv(Player::White, "a0", Quadrant::Q1, Spin::Clockwise));
    assert_eq!(result, Err(MoveError::WrongPlayer(Player::White)));
    assert_eq!(game, before);
    assert_eq!(game.to_move(), Player::Black);
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = Game::new();
    apply_all(
        &mut game,
        &[mv(Player::Black, "a0", Quadrant::Q4, Spin::Clockwise)],
    );
    let before = game.clone();

    let result = game.make_move(mv(Player::White, "a0", Quadrant::Q2, Spin::Clockwise));
    assert_eq!(result, Err(MoveError::InvalidPosition(pos("a0"))));
    assert_eq!(game, before);
}

/// Black builds a0-a4 while White places in the bottom-left quadrant;
/// every rotation targets the empty Q4, so the board stays literal.
fn black_row_setup() -> Vec<Move> {
    vec![
        mv(Player::Black, "a0", Quadrant::Q4, Spin::Clockwise),
        mv(Player::White, "f0", Quadrant::Q4, Spin::Clockwise),
        mv(Player::Black, "a1", Quadrant::Q4, Spin::Clockwise),
        mv(Player::White, "f1", Quadrant::Q4, Spin::Clockwise),
        mv(Player::Black, "a2", Quadrant::Q4, Spin::Clockwise),
        mv(Player::White, "f2", Quadrant::Q4, Spin::Clockwise),
        mv(Player::Black, "a3", Quadrant::Q4, Spin::Clockwise),
        mv(Player::White, "e0", Quadrant::Q4, Spin::Clockwise),
    ]
}

#[test]
fn test_winning_placement_skips_rotation() {
    let mut game = Game::new();
    apply_all(&mut game, &black_row_setup());

    // a4 completes the line; the requested Q1 rotation must not run.
    let result = game.make_move(mv(Player::Black, "a4", Quadrant::Q1, Spin::Clockwise));
    assert_eq!(
        result,
        Ok(MoveOutcome::Finished(GameStatus::Won(Player::Black)))
    );
    assert_eq!(game.status(), GameStatus::Won(Player::Black));

    // Had Q1 been rotated, a0-a2 would have moved.
    for coord in ["a0", "a1", "a2", "a3", "a4"] {
        assert_eq!(game.board().get(pos(coord)), Cell::Occupied(Player::Black));
    }
}

#[test]
fn test_no_moves_after_game_is_won() {
    let mut game = Game::new();
    apply_all(&mut game, &black_row_setup());
    game.make_move(mv(Player::Black, "a4", Quadrant::Q1, Spin::Clockwise))
        .expect("winning move");

    let result = game.make_move(mv(Player::White, "d0", Quadrant::Q4, Spin::Clockwise));
    assert_eq!(result, Err(MoveError::GameOver));
}

#[test]
fn test_rotation_completes_a_line() {
    let mut game = Game::new();
    apply_all(
        &mut game,
        &[
            mv(Player::Black, "a0", Quadrant::Q4, Spin::Clockwise),
            mv(Player::White, "f0", Quadrant::Q4, Spin::Clockwise),
            mv(Player::Black, "a1", Quadrant::Q4, Spin::Clockwise),
            mv(Player::White, "f1", Quadrant::Q4, Spin::Clockwise),
            mv(Player::Black, "a2", Quadrant::Q4, Spin::Clockwise),
            mv(Player::White, "f2", Quadrant::Q4, Spin::Clockwise),
            mv(Player::Black, "c3", Quadrant::Q4, Spin::Clockwise),
            mv(Player::White, "e0", Quadrant::Q4, Spin::Clockwise),
        ],
    );

    // Placing b3 does not win; turning Q2 clockwise sends c3 to a3 and
    // b3 to a4, completing the a-row.
    let result = game.make_move(mv(Player::Black, "b3", Quadrant::Q2, Spin::Clockwise));
    assert_eq!(
        result,
        Ok(MoveOutcome::Finished(GameStatus::Won(Player::Black)))
    );
    assert!(game.board().is_empty(pos("b3")));
    assert_eq!(game.board().get(pos("a3")), Cell::Occupied(Player::Black));
    assert_eq!(game.board().get(pos("a4")), Cell::Occupied(Player::Black));
}

#[test]
fn test_rotation_winning_for_both_players_is_a_draw() {
    let mut game = Game::new();
    apply_all(
        &mut game,
        &[
            mv(Player::Black, "a0", Quadrant::Q3, Spin::Clockwise),
            mv(Player::White, "a3", Quadrant::Q3, Spin::Clockwise),
            mv(Player::Black, "a1", Quadrant::Q3, Spin::Clockwise),
            mv(Player::White, "a4", Quadrant::Q3, Spin::Clockwise),
            mv(Player::Black, "a2", Quadrant::Q3, Spin::Clockwise),
            mv(Player::White, "a5", Quadrant::Q3, Spin::Clockwise),
            mv(Player::Black, "b3", Quadrant::Q3, Spin::Clockwise),
            mv(Player::White, "d5", Quadrant::Q3, Spin::Clockwise),
            mv(Player::Black, "c3", Quadrant::Q3, Spin::Clockwise),
        ],
    );

    // Turning Q2 clockwise completes the a-row for Black (c3 -> a3,
    // b3 -> a4) and column 5 for White (a3 -> a5, a4 -> b5, a5 -> c5)
    // in the same move.
    let result = game.make_move(mv(Player::White, "e5", Quadrant::Q2, Spin::Clockwise));
    assert_eq!(result, Ok(MoveOutcome::Finished(GameStatus::Draw)));
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_replay_reproduces_a_game() {
    let mut game = Game::new();
    apply_all(&mut game, &black_row_setup());
    assert_eq!(game.history().len(), 8);

    let replayed = Game::replay(game.history()).expect("history replays cleanly");
    assert_eq!(replayed, game);
    assert_eq!(replayed.to_move(), Player::Black);
}

#[test]
fn test_replay_surfaces_rejections() {
    let moves = [
        mv(Player::Black, "a0", Quadrant::Q4, Spin::Clockwise),
        mv(Player::Black, "a1", Quadrant::Q4, Spin::Clockwise),
    ];
    assert_eq!(
        Game::replay(&moves),
        Err(MoveError::WrongPlayer(Player::Black))
    );
}
