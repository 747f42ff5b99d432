use super::*;
use crate::match_runner::{GameResult, PlayedGame};

fn game(black_discs: u32, white_discs: u32) -> GameRecord {
    let result = match black_discs.cmp(&white_discs) {
        std::cmp::Ordering::Greater => GameResult::Win,
        std::cmp::Ordering::Less => GameResult::Loss,
        std::cmp::Ordering::Equal => GameResult::Draw,
    };
    GameRecord {
        result,
        black_discs,
        white_discs,
        moves: black_discs + white_discs - 4,
        black_passes: 0,
        white_passes: 0,
    }
}

#[test]
fn test_expected_score() {
    assert!((expected_score(1500.0, 1500.0) - 0.5).abs() < 1e-12);
    assert!((expected_score(1900.0, 1500.0) - 10.0 / 11.0).abs() < 1e-12);
    let sum = expected_score(1620.0, 1480.0) + expected_score(1480.0, 1620.0);
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn test_k_grows_with_disc_margin() {
    assert_eq!(game_k(&game(33, 31)), 33.0);
    assert_eq!(game_k(&game(40, 24)), 40.0);
    assert_eq!(game_k(&game(0, 64)), 64.0);
    assert_eq!(game_k(&game(32, 32)), K_FACTOR);
}

#[test]
fn test_record_game_moves_both_ratings() {
    let mut tracker = EloTracker::new();
    let change = tracker.record_game("minimax", "random", &game(40, 24));

    assert_eq!(change, 20.0);
    let winner = tracker.rating("minimax");
    let loser = tracker.rating("random");
    assert_eq!(winner.elo, INITIAL_RATING + 20.0);
    assert_eq!(loser.elo, INITIAL_RATING - 20.0);
    assert_eq!((winner.games, loser.games), (1, 1));
    assert_eq!((winner.disc_balance, loser.disc_balance), (16, -16));
}

#[test]
fn test_wipe_out_moves_more_than_narrow_win() {
    let mut narrow = EloTracker::new();
    narrow.record_game("a", "b", &game(31, 33));
    let mut wipe_out = EloTracker::new();
    wipe_out.record_game("a", "b", &game(0, 64));

    assert!(wipe_out.rating("b").elo > narrow.rating("b").elo);
    assert_eq!(wipe_out.rating("a").elo, INITIAL_RATING - 32.0);
}

#[test]
fn test_draw_between_equals_changes_nothing() {
    let mut tracker = EloTracker::new();
    assert_eq!(tracker.record_game("a", "b", &game(32, 32)), 0.0);
    assert_eq!(tracker.rating("a").elo, INITIAL_RATING);
    assert_eq!(tracker.rating("b").games, 1);
}

#[test]
fn test_passes_go_to_the_side_that_passed() {
    let mut record = game(50, 10);
    record.white_passes = 3;
    record.black_passes = 1;

    let mut tracker = EloTracker::new();
    tracker.record_game("minimax", "random", &record);
    assert_eq!(tracker.rating("minimax").passes, 1);
    assert_eq!(tracker.rating("random").passes, 3);
}

#[test]
fn test_record_match_follows_seats() {
    let mut result = MatchResult::new();
    result.push(PlayedGame {
        engine1_black: true,
        record: game(40, 24),
    });
    result.push(PlayedGame {
        engine1_black: false,
        record: game(20, 44),
    });

    let mut tracker = EloTracker::new();
    tracker.record_match("minimax", "random", &result);

    let rating = tracker.rating("minimax");
    assert_eq!(rating.games, 2);
    assert_eq!(rating.disc_balance, 16 + 24);
    assert!(rating.elo > INITIAL_RATING + 20.0);
    let total = rating.elo + tracker.rating("random").elo;
    assert!((total - 2.0 * INITIAL_RATING).abs() < 1e-9);
}

#[test]
fn test_leaderboard_sorted_by_rating() {
    let mut tracker = EloTracker::new();
    tracker.record_game("random", "minimax", &game(12, 52));
    tracker.record_game("alpha", "beta", &game(32, 32));

    let names: Vec<&str> = tracker.leaderboard().iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["minimax", "alpha", "beta", "random"]);

    let table = tracker.format_leaderboard();
    assert!(table.starts_with("=== Leaderboard ==="));
    assert!(table.contains("+40"));
}

#[test]
fn test_unseen_engine_has_initial_rating() {
    let tracker = EloTracker::new();
    assert_eq!(tracker.rating("edax"), Rating::default());
    assert!(tracker.leaderboard().is_empty());
}
