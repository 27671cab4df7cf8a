use hundredandten_cli::exit_code;
use hundredandten_cli::run;
use hundredandten_engine::logger::GameRecord;
use serial_test::serial;
use std::fs;

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["hundredandten", "sim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn records(path: &std::path::Path) -> Vec<GameRecord> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
#[serial]
fn sim_gracefully_saves_partial_and_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.jsonl");
    let path_str = path.to_str().unwrap();

    unsafe {
        std::env::set_var("HUNDREDANDTEN_SIM_BREAK_AFTER", "2");
    }
    let (code, out, _) = sim(&[
        "--games", "4", "--seed", "resume", "--players", "2", "--output", path_str,
    ]);
    unsafe {
        std::env::remove_var("HUNDREDANDTEN_SIM_BREAK_AFTER");
    }
    assert_eq!(code, exit_code::INTERRUPTED);
    assert!(out.contains("Interrupted: saved 2/4"));
    assert_eq!(records(&path).len(), 2);

    let (code, out, _) = sim(&["--games", "4", "--players", "2", "--resume", path_str]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Resumed from 2"));
    assert!(out.contains("Simulated: 4 games"));

    let all = records(&path);
    assert_eq!(all.len(), 4);
    let seeds: Vec<&str> = all.iter().map(|r| r.seed.as_str()).collect();
    assert_eq!(seeds, ["resume-0", "resume-1", "resume-2", "resume-3"]);
    assert_eq!(all[3].game_id.split('-').nth(1), Some("000004"));
}

#[test]
#[serial]
fn resumed_run_matches_uninterrupted_run() {
    let dir = tempfile::tempdir().unwrap();
    let whole = dir.path().join("whole.jsonl");
    let split = dir.path().join("split.jsonl");

    let (code, _, _) = sim(&[
        "--games", "3", "--seed", "same", "--players", "4", "--output",
        whole.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);

    let (code, _, _) = sim(&[
        "--games", "1", "--seed", "same", "--players", "4", "--output",
        split.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    let (code, _, _) = sim(&[
        "--games", "3", "--players", "4", "--resume", split.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);

    let a = records(&whole);
    let b = records(&split);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.moves, y.moves);
        assert_eq!(x.winner, y.winner);
        assert_eq!(x.scores, y.scores);
    }
}

#[test]
#[serial]
fn resume_warns_about_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.jsonl");
    let (code, _, _) = sim(&[
        "--games", "1", "--seed", "dup", "--players", "2", "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    let line = fs::read_to_string(&path).unwrap();
    fs::write(&path, format!("{line}{line}")).unwrap();

    let (code, out, err) = sim(&["--games", "2", "--resume", path.to_str().unwrap()]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("Resumed from 1"));
    assert!(err.contains("duplicate"));
    assert_eq!(records(&path).len(), 3);
}

#[test]
#[serial]
fn records_carry_run_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meta.jsonl");
    let (code, _, _) = sim(&[
        "--games", "1", "--seed", "meta", "--players", "3", "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);

    let record = &records(&path)[0];
    let meta = record.meta.as_ref().unwrap();
    assert_eq!(meta["base_seed"], "meta");
    assert_eq!(meta["index"], 0);
    assert_eq!(meta["ai"], "BaselineAI");
    assert!(record.ts.is_some());
    assert_eq!(record.players.len(), 3);
}
