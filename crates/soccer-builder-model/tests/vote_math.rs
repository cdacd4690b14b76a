use serde_json::json;
use soccer_builder_model::{Player, Stats};

fn vote(rit: i64) -> Stats {
    Stats {
        rit,
        ..Stats::default()
    }
}

#[test]
fn mean_of_a_single_vote_is_the_vote() {
    let only = vote(80);
    let mean = Stats::round_mean(std::slice::from_ref(&only)).expect("one vote");
    assert_eq!(mean, only);
}

#[test]
fn mean_rounds_half_to_even() {
    // 80.5 rounds down to 80, 81.5 rounds up to 82.
    assert_eq!(Stats::round_mean(&[vote(80), vote(81)]).expect("two votes").rit, 80);
    assert_eq!(Stats::round_mean(&[vote(81), vote(82)]).expect("two votes").rit, 82);
    assert_eq!(Stats::round_mean(&[vote(70), vote(80), vote(81)]).expect("three votes").rit, 77);
}

#[test]
fn mean_of_no_votes_is_none() {
    assert!(Stats::round_mean(&[]).is_none());
}

#[test]
fn record_vote_appends_history_and_replaces_stats() {
    let mut player: Player = serde_json::from_value(json!({
        "id": "p1",
        "name": "Ana",
        "number": "9",
        "role": "DEL",
        "stats": {"rit": 10, "tir": 10},
        "position": {"x": 0.0, "y": 0.0}
    }))
    .expect("player");

    // The caller-assigned stats never join the average.
    let first = player.record_vote(vote(80));
    assert_eq!(player.votes.len(), 1);
    assert_eq!(first.rit, 80);
    assert_eq!(first.tir, 70);
    assert_eq!(player.stats, first);

    let second = player.record_vote(vote(81));
    assert_eq!(player.votes.len(), 2);
    assert_eq!(second.rit, 80);
    assert_eq!(player.votes[0].rit, 80);
    assert_eq!(player.votes[1].rit, 81);
}
