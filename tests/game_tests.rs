//! Session tests - the Playing / GameOver / Quit state machine end to end

use tui_2048::core::{GameState, Outcome, Status};
use tui_2048::types::{Command, Direction, NUM_STARTING_TILES};

#[test]
fn test_fresh_game_has_exactly_two_seed_tiles() {
    for seed in [1, 42, 12345, u32::MAX] {
        let game = GameState::new(seed);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.board().tile_count(), NUM_STARTING_TILES);
        assert!(!game.board().is_full());
        for &cell in game.board().cells() {
            assert!(
                cell == 0 || cell == 2 || cell == 4,
                "seed tile must be 2 or 4, got {}",
                cell
            );
        }
    }
}

#[test]
fn test_effective_move_spawns_exactly_one_tile() {
    let mut game = GameState::new(12345);
    let before = game.board().tile_count();

    for &dir in &Direction::ALL {
        match game.apply_command(Command::Move(dir)) {
            Outcome::Moved => {
                // Merges may reduce the count, but the spawn adds exactly one.
                assert!(game.board().tile_count() <= before + 1);
                assert!(game.board().tile_count() >= 1);
                return;
            }
            Outcome::Rejected => continue,
            other => panic!("unexpected outcome on a fresh board: {:?}", other),
        }
    }
    panic!("a fresh board must admit at least one move");
}

#[test]
fn test_rejected_move_does_not_spawn() {
    let mut game = GameState::new(7);

    // Saturate toward one corner until a direction rejects.
    for _ in 0..128 {
        let tiles = game.board().tile_count();
        match game.apply_command(Command::Move(Direction::Left)) {
            Outcome::Rejected => {
                assert_eq!(game.board().tile_count(), tiles);
                return;
            }
            Outcome::Moved => {}
            Outcome::GameOver => return,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
    panic!("repeated left moves must eventually stop having an effect");
}

#[test]
fn test_restart_produces_a_fresh_playing_board() {
    let mut game = GameState::new(2);
    for _ in 0..10 {
        game.apply_command(Command::Move(Direction::Left));
        game.apply_command(Command::Move(Direction::Down));
    }

    assert_eq!(game.apply_command(Command::Restart), Outcome::Restarted);
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.board().tile_count(), NUM_STARTING_TILES);
}

#[test]
fn test_quit_from_playing() {
    let mut game = GameState::new(2);
    assert_eq!(game.apply_command(Command::Quit), Outcome::Quit);
    assert_eq!(game.status(), Status::Quit);
}

#[test]
fn test_unrecognized_is_a_noop_command() {
    let mut game = GameState::new(3);
    let board_before = game.board().clone();

    assert_eq!(game.apply_command(Command::Unrecognized), Outcome::Ignored);
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.last_outcome(), Some(Outcome::Ignored));
}

#[test]
fn test_full_session_reaches_game_over_or_keeps_playing() {
    // Drive a deterministic session with a rotating move pattern; every
    // intermediate state must keep the core invariants.
    let mut game = GameState::new(99);
    let pattern = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    for i in 0..500 {
        let outcome = game.apply_command(Command::Move(pattern[i % 4]));

        for &cell in game.board().cells() {
            assert!(cell == 0 || cell.is_power_of_two());
            assert_ne!(cell, 1);
        }

        match outcome {
            Outcome::GameOver => {
                assert_eq!(game.status(), Status::GameOver);
                // Only restart and quit are honoured now.
                assert_eq!(
                    game.apply_command(Command::Move(Direction::Left)),
                    Outcome::Ignored
                );
                assert_eq!(game.apply_command(Command::Restart), Outcome::Restarted);
                return;
            }
            Outcome::Moved | Outcome::Rejected => {
                assert_eq!(game.status(), Status::Playing);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
