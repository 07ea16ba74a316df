//! Game integration tests.

use std::fs;

use bjsim::game::summary::summary_path;
use bjsim::{Game, GameOptions, Outcome, PlayError, ShuffleOptions, ShufflePolicy, StopReason};

/// Options that leave the deck in sorted order so deals are predictable.
fn unshuffled() -> GameOptions {
    GameOptions::default().with_shuffle(ShufflePolicy::Fixed(ShuffleOptions::default()))
}

#[test]
fn plays_rounds_against_sorted_deck() {
    let mut game = Game::new(10, unshuffled(), 1);
    let report = game.play(3, 15).unwrap();

    let expected = "\
Round 1 of Blackjack!
wallet: 10
bet: 5
Player Cards: (2, spades) (2, diamonds)
Dealer Cards: (2, hearts) (?, ?)
(3, spades) was pulled by a Player
(3, hearts) was pulled by a Player
(3, diamonds) was pulled by a Player
(3, clubs) was pulled by a Player
Dealer Cards Revealed: (2, hearts) (2, clubs)
(4, spades) was pulled by a Dealer
(4, hearts) was pulled by a Dealer
(4, diamonds) was pulled by a Dealer
(4, clubs) was pulled by a Dealer
Player lost with a score of 16. Dealer won with a score of 20.
Round 2 of Blackjack!
wallet: 5
bet: 5
Player Cards: (5, spades) (5, diamonds)
Dealer Cards: (5, hearts) (?, ?)
(6, spades) was pulled by a Player
Dealer Cards Revealed: (5, hearts) (5, clubs)
(6, hearts) was pulled by a Dealer
(6, diamonds) was pulled by a Dealer
Player won with a score of 16. Dealer lost with a score of 22.
Round 3 of Blackjack!
wallet: 10
bet: 10
Player Cards: (6, clubs) (7, hearts)
Dealer Cards: (7, spades) (?, ?)
(7, clubs) was pulled by a Player
Dealer Cards Revealed: (7, spades) (7, diamonds)
(8, spades) was pulled by a Dealer
Player won with a score of 20. Dealer lost with a score of 22.
";
    assert_eq!(game.transcript().as_str(), expected);
    assert_eq!(report.stopped, None);
    assert_eq!(report.rounds.len(), 3);

    let outcomes: Vec<Outcome> = report.rounds.iter().map(|round| round.outcome).collect();
    assert_eq!(
        outcomes,
        [Outcome::DealerWins, Outcome::PlayerWins, Outcome::PlayerWins]
    );
    assert_eq!(report.rounds[2].wallet_before, 10);
    assert_eq!(report.rounds[2].bet, 10);

    assert_eq!(game.wallet(), 20);
    assert_eq!(game.bet(), 15);
    assert_eq!(game.rounds_played(), 3);
    assert_eq!(game.deck().len(), 27);
    assert_eq!(game.history().len(), 3);
}

#[test]
fn stops_when_wallet_cannot_cover_bet() {
    let mut game = Game::new(5, unshuffled(), 1);
    let report = game.play(2, 21).unwrap();

    assert!(game.transcript().as_str().ends_with(
        "Player lost with a score of 24. Dealer won with a score of 17.\n\
         Wallet amount $0 is less than bet amount $5."
    ));
    assert_eq!(report.rounds.len(), 1);
    assert_eq!(
        report.stopped,
        Some(StopReason::InsufficientFunds { wallet: 0, bet: 5 })
    );
    assert_eq!(game.deck().len(), 39);
}

#[test]
fn stops_when_deck_runs_low() {
    let mut game = Game::new(500, unshuffled(), 1);
    game.play(13, 21).unwrap();
    assert_eq!(game.rounds_played(), 8);

    game.reset_transcript();
    let report = game.play(1, 17).unwrap();

    assert_eq!(game.transcript().as_str(), "Not enough cards for a game.");
    assert!(report.rounds.is_empty());
    assert_eq!(report.stopped, Some(StopReason::NotEnoughCards { remaining: 2 }));
    assert_eq!(game.rounds_played(), 8);
}

#[test]
fn record_outcome_logs_each_result() {
    let mut game = Game::new(10, GameOptions::default(), 0);
    assert_eq!(game.record_outcome(10, 12), Outcome::DealerWins);
    assert_eq!(game.record_outcome(21, 21), Outcome::Tie);
    assert_eq!(game.record_outcome(22, 23), Outcome::Tie);
    assert_eq!(game.record_outcome(12, 2), Outcome::PlayerWins);
    assert_eq!(game.record_outcome(22, 2), Outcome::DealerWins);
    assert_eq!(game.record_outcome(2, 22), Outcome::PlayerWins);

    let expected = "\
Player lost with a score of 10. Dealer won with a score of 12.
Player and Dealer tie.
Player and Dealer tie.
Player won with a score of 12. Dealer lost with a score of 2.
Player lost with a score of 22. Dealer won with a score of 2.
Player won with a score of 2. Dealer lost with a score of 22.
";
    assert_eq!(game.transcript().as_str(), expected);

    game.reset_transcript();
    assert_eq!(game.transcript().as_str(), "");
    assert_eq!(game.wallet(), 10);
}

#[test]
fn rejects_invalid_play_arguments() {
    let mut game = Game::new(10, GameOptions::default(), 0);

    assert!(matches!(game.play(0, 17), Err(PlayError::NoRounds)));
    assert!(matches!(
        game.play(1, 1),
        Err(PlayError::InvalidThreshold { threshold: 1 })
    ));
    assert_eq!(game.rounds_played(), 0);
    assert_eq!(game.deck().len(), 52);
    assert_eq!(game.transcript().as_str(), "");
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut first = Game::new(100, GameOptions::default(), 20);
    let mut second = Game::new(100, GameOptions::default(), 20);

    first.play(4, 17).unwrap();
    second.play(4, 17).unwrap();

    assert_eq!(first.transcript(), second.transcript());
    assert_eq!(first.wallet(), second.wallet());
    assert_eq!(first.deck(), second.deck());
}

#[test]
fn zero_random_passes_leave_deck_sorted() {
    let options = GameOptions::default().with_shuffle(ShufflePolicy::Random { max_passes: 0 });
    let mut random = Game::new(10, options, 3);
    let mut fixed = Game::new(10, unshuffled(), 3);

    random.play(2, 15).unwrap();
    fixed.play(2, 15).unwrap();
    assert_eq!(random.transcript(), fixed.transcript());
}

#[test]
fn oversized_overhand_is_clamped_to_deck() {
    let options = GameOptions::default().with_shuffle(ShufflePolicy::Fixed(
        ShuffleOptions::default().with_modified_overhand(60),
    ));
    let mut game = Game::new(10, options, 0);

    let report = game.play(1, 15).unwrap();
    assert_eq!(report.rounds.len(), 1);
    assert!(game.deck().len() <= 48);
}

#[test]
fn game_numbers_increase() {
    let first = Game::new(1, GameOptions::default(), 0);
    let second = Game::new(1, GameOptions::default(), 0);
    assert!(second.game_number() > first.game_number());
}

#[test]
fn appends_round_summaries_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = Game::new(10, unshuffled().with_summary_dir(dir.path()), 1);

    game.play(1, 15).unwrap();
    game.play(1, 15).unwrap();

    let path = summary_path(dir.path(), game.game_number());
    let text = fs::read_to_string(path).unwrap();

    assert!(text.starts_with("ROUND 1:\nPlayer Hand:\n____\n|2  |\n| ♠ |\n|__2|\n"));
    assert!(text.contains("|__3|\nDealer Hand:\n____\n|2  |\n| ♥ |\n|__2|\n"));
    assert!(text.contains("Winner of ROUND 1: Dealer\n\nROUND 2:\nPlayer Hand:\n"));
    assert!(text.ends_with("|__6|\nWinner of ROUND 2: Player\n"));
    assert_eq!(text, format!("{}\n{}", game.history()[0].summary, game.history()[1].summary));
}

#[test]
fn games_write_separate_summary_files() {
    let dir = tempfile::tempdir().unwrap();
    let options = unshuffled().with_summary_dir(dir.path());

    let mut first = Game::new(10, options.clone(), 1);
    let mut second = Game::new(10, options, 1);
    first.play(1, 15).unwrap();
    second.play(1, 15).unwrap();

    let first_text = fs::read_to_string(summary_path(dir.path(), first.game_number())).unwrap();
    let second_text = fs::read_to_string(summary_path(dir.path(), second.game_number())).unwrap();
    assert_eq!(first_text, second_text);
    assert!(first_text.starts_with("ROUND 1:\n"));
}

#[test]
fn missing_summary_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");
    let mut game = Game::new(10, unshuffled().with_summary_dir(missing), 1);

    assert!(matches!(game.play(1, 15), Err(PlayError::Summary(_))));
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].round, 1);
}

#[test]
fn min_cards_below_initial_deal_still_stops_cleanly() {
    let mut game = Game::new(5000, unshuffled().with_min_cards(0), 1);
    let report = game.play(30, 21).unwrap();

    assert_eq!(report.stopped, Some(StopReason::NotEnoughCards { remaining: 2 }));
    assert_eq!(report.rounds.len(), 8);
    assert_eq!(game.rounds_played(), 8);
    assert_eq!(game.history().len(), 8);
    assert_eq!(game.deck().len(), 2);
}
