use std::fs;

use hundredandten_engine::actions::Action;
use hundredandten_engine::bid::BidAmount;
use hundredandten_engine::game::Game;
use hundredandten_engine::logger::{GameLogger, GameRecord};
use hundredandten_engine::player::{HasRoles, Player, RoundRole};

fn started_game() -> Game {
    let players = vec![Player::new("a"), Player::new("b"), Player::new("c")];
    let mut game = Game::new(players, "logged").expect("new game");
    game.act(Action::bid("b", BidAmount::Twenty)).expect("bid");
    game.act(Action::bid("c", BidAmount::Pass)).expect("pass");
    game
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let rec = GameRecord::from_game(logger.next_id(), &started_game());
    logger.write(&rec).expect("write");
    logger.write(&rec).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 2);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = GameLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ts.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let mut rec = GameRecord::from_game("20250102-000010", &started_game());
    logger.write(&rec).expect("write");
    rec.ts = Some("2025-01-02T03:04:05Z".to_string());
    logger.write(&rec).expect("write");

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<GameRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(lines[0].ts.is_some(), "ts should be injected");
    assert_eq!(lines[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn records_replay_the_game() {
    let game = started_game();
    let rec = GameRecord::from_game("20250102-000001", &game);
    let json = serde_json::to_string(&rec).unwrap();
    assert!(json.contains(r#""type":"bid""#));

    let parsed: GameRecord = serde_json::from_str(&json).unwrap();
    let replayed = parsed.replay().unwrap();
    assert_eq!(replayed.moves(), game.moves());
    assert_eq!(
        replayed.active_round().players().get(0).unwrap().hand,
        game.active_round().players().get(0).unwrap().hand
    );
    assert_eq!(parsed.winner, None);
}

#[test]
fn append_keeps_existing_records_and_continues_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.jsonl");
    {
        let mut logger = GameLogger::create(&path).expect("create logger");
        let rec = GameRecord::from_game(logger.next_id(), &started_game());
        logger.write(&rec).expect("write");
    }
    let mut logger = GameLogger::append(&path, 1).expect("append logger");
    let id = logger.next_id();
    assert!(id.ends_with("-000002"));
    logger
        .write(&GameRecord::from_game(id, &started_game()))
        .expect("write");

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
}

fn four_seats() -> Vec<Player> {
    ["1", "2", "3", "4"].iter().map(|id| Player::new(*id)).collect()
}

fn pre_passed(game: &Game, identifier: &str) -> bool {
    game.active_round()
        .players()
        .by_identifier(identifier)
        .expect("seated")
        .has_role(RoundRole::PrePassed)
}

#[test]
fn pending_pre_pass_survives_a_saved_record() {
    let mut game = Game::new(four_seats(), "early-pass").expect("new game");
    // "2" bids first, so "3" passing now is a pre-pass
    game.act(Action::bid("3", BidAmount::Pass)).expect("pre-pass");
    assert!(pre_passed(&game, "3"));

    let rec = GameRecord::from_game("20250103-000001", &game);
    assert_eq!(rec.moves, vec![Action::bid("3", BidAmount::Pass)]);
    let json = serde_json::to_string(&rec).unwrap();
    let mut replayed = serde_json::from_str::<GameRecord>(&json)
        .unwrap()
        .replay()
        .expect("replay");
    assert!(pre_passed(&replayed, "3"));

    game.act(Action::bid("2", BidAmount::Fifteen)).expect("bid");
    replayed.act(Action::bid("2", BidAmount::Fifteen)).expect("bid");
    assert_eq!(game.active_round().active_player().unwrap().identifier, "4");
    assert_eq!(
        replayed.active_round().active_player().unwrap().identifier,
        "4"
    );
    assert_eq!(replayed.active_round().bids(), game.active_round().bids());
    assert_eq!(replayed.moves(), game.moves());
}

#[test]
fn unpass_is_recorded_and_replayed() {
    let mut game = Game::new(four_seats(), "change-of-heart").expect("new game");
    game.act(Action::bid("4", BidAmount::Pass)).expect("pre-pass");
    game.act(Action::unpass("4")).expect("unpass");
    assert!(!pre_passed(&game, "4"));

    let rec = GameRecord::from_game("20250103-000002", &game);
    assert_eq!(rec.moves.len(), 2);
    let replayed = rec.replay().expect("replay");
    assert!(!pre_passed(&replayed, "4"));
    assert_eq!(
        replayed.active_round().available_bids("4"),
        game.active_round().available_bids("4")
    );
}
