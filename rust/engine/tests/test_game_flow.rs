use std::sync::Arc;

use hundredandten_engine::actions::Action;
use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::cards::SelectableSuit;
use hundredandten_engine::errors::GameError;
use hundredandten_engine::events::Event;
use hundredandten_engine::game::{Game, GameStatus, WINNING_SCORE};
use hundredandten_engine::player::Player;
use hundredandten_engine::policy::DecisionPolicy;
use hundredandten_engine::round::{Round, RoundStatus};

/// Opens the bidding at fifteen, otherwise passes; always names hearts,
/// keeps every card and plays the first legal card.
struct FirstLegal;

impl DecisionPolicy for FirstLegal {
    fn suggest(&self, round: &Round) -> Result<Action, GameError> {
        let active = round.active_player()?.identifier.clone();
        match round.status() {
            RoundStatus::Bidding => {
                let amount = if round.active_bid().is_none() {
                    BidAmount::Fifteen
                } else {
                    BidAmount::Pass
                };
                Ok(Action::bid(active, amount))
            }
            RoundStatus::TrumpSelection => Ok(Action::select_trump(active, SelectableSuit::Hearts)),
            RoundStatus::Discard => Ok(Action::discard(active, Vec::new())),
            RoundStatus::Tricks => {
                let card = round.playable_cards(&active)[0];
                Ok(Action::play(active, card))
            }
            status => Err(GameError::NoActivePlayer(status)),
        }
    }

    fn name(&self) -> &str {
        "first-legal"
    }
}

fn bots() -> Vec<Player> {
    ["w", "x", "y", "z"].iter().map(|id| Player::automated(*id)).collect()
}

#[test]
fn automated_game_runs_to_a_winner() {
    let game = Game::new(bots(), "full-game")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();

    assert_eq!(game.status(), GameStatus::Won);
    let winner = game.winner().unwrap().identifier.clone();
    let total = game
        .scores()
        .into_iter()
        .find(|s| s.identifier == winner)
        .unwrap()
        .value;
    assert!(total >= WINNING_SCORE);
    assert_eq!(
        game.events().last(),
        Some(&Event::GameEnd {
            winner: winner.clone()
        })
    );
    assert_eq!(game.events().first(), Some(&Event::GameStart));
}

#[test]
fn finished_games_refuse_moves_and_suggestions() {
    let mut game = Game::new(bots(), "over")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();
    assert_eq!(game.suggestion().unwrap_err(), GameError::GameOver);
    assert_eq!(
        game.act(Action::bid("w", BidAmount::Pass)).unwrap_err(),
        GameError::GameOver
    );
}

#[test]
fn deal_passes_left_after_every_played_round() {
    let game = Game::new(bots(), "rotation")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();
    for pair in game.rounds().windows(2) {
        let dealer = pair[0].dealer().unwrap().identifier.clone();
        let next = game.players().after(&dealer).unwrap().identifier.clone();
        assert_eq!(pair[0].status(), RoundStatus::Completed);
        assert_eq!(pair[1].dealer().unwrap().identifier, next);
    }
}

#[test]
fn recorded_moves_replay_the_same_result() {
    let game = Game::new(bots(), "replayable")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();
    let replayed = Game::with_moves(bots(), "replayable", &game.moves()).unwrap();
    assert_eq!(replayed.status(), GameStatus::Won);
    assert_eq!(replayed.scores(), game.scores());
    assert_eq!(replayed.score_history(), game.score_history());
    assert_eq!(
        replayed.winner().map(|p| p.identifier.clone()),
        game.winner().map(|p| p.identifier.clone())
    );
}

#[test]
fn automation_stops_at_a_person() {
    let mut players = bots();
    players[0] = Player::new("you");
    let game = Game::new(players, "mixed")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();
    let round = game.active_round();
    assert_eq!(round.active_player().unwrap().identifier, "you");
    assert_eq!(game.status(), GameStatus::Round(RoundStatus::Bidding));
    assert_eq!(round.bids().len(), 3);
    assert!(matches!(game.suggestion(), Ok(Action::Bid { .. })));
}

#[test]
fn scores_by_round_start_at_zero() {
    let game = Game::new(bots(), "by-round")
        .unwrap()
        .with_policy(Arc::new(FirstLegal))
        .unwrap();
    let by_round = game.scores_by_round();
    assert_eq!(by_round.len(), game.rounds().len() + 1);
    assert!(by_round[0].iter().all(|s| s.value == 0));
    assert_eq!(by_round.last().unwrap(), &game.scores());
}

#[test]
fn dealer_takes_the_bid_and_the_round_reaches_tricks() {
    let players = vec![Player::new("a"), Player::new("b")];
    let mut game = Game::new(players, "two-hander").unwrap();
    assert_eq!(game.active_round().dealer().unwrap().identifier, "a");

    game.act(Action::bid("b", BidAmount::Pass)).unwrap();
    game.act(Action::bid("a", BidAmount::Fifteen)).unwrap();
    assert_eq!(game.status(), GameStatus::Round(RoundStatus::TrumpSelection));
    assert_eq!(game.active_round().active_bidder().unwrap().identifier, "a");

    game.act(Action::select_trump("a", SelectableSuit::Diamonds)).unwrap();
    assert_eq!(game.status(), GameStatus::Round(RoundStatus::Discard));
    assert_eq!(game.active_round().trump(), Some(SelectableSuit::Diamonds));

    assert_eq!(game.active_round().active_player().unwrap().identifier, "b");
    game.act(Action::discard("b", Vec::new())).unwrap();
    assert_eq!(game.active_round().active_player().unwrap().identifier, "a");
    game.act(Action::discard("a", Vec::new())).unwrap();

    assert_eq!(game.status(), GameStatus::Round(RoundStatus::Tricks));
    let order: Vec<&str> = game
        .active_round()
        .discards()
        .iter()
        .map(|d| d.identifier.as_str())
        .collect();
    assert_eq!(order, ["b", "a"]);
    assert!(game.active_round().active_trick().is_ok());
    // bidder "a" dealt, so "b" leads the first trick
    assert_eq!(game.active_round().active_player().unwrap().identifier, "b");
}
