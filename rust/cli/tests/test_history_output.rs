use ante_cli::run_with_input;
use serde_json::Value;
use std::io::Cursor;
use std::path::Path;

fn play_with_history(path: &Path, input: &str) -> i32 {
    let path = path.to_string_lossy().to_string();
    let args = ["ante", "play", "--ante", "1", "--seed", "8", "--history", path.as_str()];
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    run_with_input(args, &mut stdin, &mut out, &mut err)
}

fn records(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn lost_round_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.jsonl");
    assert_eq!(play_with_history(&path, "8\n8\n8\n8\nn\n"), 0);

    let recs = records(&path);
    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(rec["outcome"], "lost");
    assert_eq!(rec["blind"], "Small");
    assert_eq!(rec["ante"], 1);
    assert_eq!(rec["requirement"]["chips"], 300);
    assert!(rec["payout"].is_null());
    assert!(rec["ts"].is_string());
    assert!(rec["seed"].is_u64());

    let actions = rec["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 4);
    assert!(actions.iter().all(|a| a["kind"] == "play"));
    assert!(actions.iter().all(|a| a["category"] == "HighCard"));

    let id = rec["round_id"].as_str().unwrap();
    assert_eq!(id.len(), 15);
    assert!(id.ends_with("-000001"));
}

#[test]
fn retry_gets_its_own_record_and_deck() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    assert_eq!(play_with_history(&path, "8\n8\n8\n8\ny\n8\n8\n8\n8\nn\n"), 0);

    let recs = records(&path);
    assert_eq!(recs.len(), 2);
    assert!(recs[1]["round_id"].as_str().unwrap().ends_with("-000002"));
    assert_ne!(recs[0]["seed"], recs[1]["seed"]);
}

#[test]
fn abandoned_round_is_recorded_as_active() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    assert_eq!(play_with_history(&path, "d\n12\nq\n"), 0);

    let recs = records(&path);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0]["outcome"], "active");
    let actions = recs[0]["actions"].as_array().unwrap();
    assert_eq!(actions[0]["kind"], "discard");
    assert_eq!(actions[0]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(recs[0]["score"], 0);
}
