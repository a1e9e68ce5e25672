use crate::config::rules::MatchRules;
use crate::domain::results::{compute_competition_results, compute_competition_results_with};
use crate::domain::test_helpers::{finished_game, new_game, pid, roster};
use crate::domain::{
    adjust_score, finish_game, register_round, GameStatus, Outcome, SpecialWin, TeamSide,
    VictoryType,
};

#[test]
fn example_scenario_two_games() {
    let roster = roster(&["p1", "p2", "p3", "p4"]);

    let g1 = finished_game("g1", ["p1", "p2"], ["p3", "p4"], (6, 0), Some(1));

    // G2: team1 trails 0-5 and comes back to 6-5.
    let rules = MatchRules::default();
    let mut g2 = new_game("g2", ["p1", "p3"], ["p2", "p4"]);
    register_round(&mut g2, VictoryType::Cruzada, Some(TeamSide::Team2), &rules).unwrap();
    register_round(&mut g2, VictoryType::Simple, Some(TeamSide::Team2), &rules).unwrap();
    register_round(&mut g2, VictoryType::LaELo, Some(TeamSide::Team1), &rules).unwrap();
    register_round(&mut g2, VictoryType::LaELo, Some(TeamSide::Team1), &rules).unwrap();
    assert_eq!((g2.team1_score, g2.team2_score), (6, 5));
    assert_eq!(g2.status, GameStatus::Finished);

    let results = compute_competition_results(&roster, &[g1, g2]);

    let p1 = results.player(&pid("p1")).unwrap();
    assert_eq!(p1.record.total_games, 2);
    assert_eq!(p1.record.wins, 2);
    assert_eq!(p1.record.buchudas, 1);
    assert_eq!(p1.record.buchudas_de_re, 1);
    assert_eq!(p1.record.win_rate, 100.0);

    let p2 = results.player(&pid("p2")).unwrap();
    assert_eq!(p2.record.total_games, 2);
    assert_eq!(p2.record.wins, 1);
    assert_eq!(p2.record.losses, 1);
    assert_eq!(p2.record.win_rate, 50.0);

    let pair = results.pair(&pid("p2"), &pid("p1")).unwrap();
    assert_eq!(pair.id.as_str(), "p1-p2");
    assert_eq!(pair.record.total_games, 1);
    assert_eq!(pair.record.wins, 1);
    assert_eq!(pair.record.buchudas, 1);
    assert_eq!(pair.record.buchudas_de_re, 0);

    assert_eq!(results.players[0].player.id, pid("p1"));
}

#[test]
fn zero_games_lists_every_player_at_zero() {
    let roster = roster(&["a", "b", "c", "d", "e"]);
    let results = compute_competition_results(&roster, &[]);

    assert_eq!(results.players.len(), 5);
    assert!(results.pairs.is_empty());
    for (row, p) in results.players.iter().zip(&roster) {
        assert_eq!(row.player.id, p.id, "roster order kept when all tie");
        assert_eq!(row.record.total_games, 0);
        assert_eq!(row.record.win_rate, 0.0);
    }
}

#[test]
fn empty_roster_yields_empty_results() {
    let game = finished_game("g1", ["a", "b"], ["c", "d"], (6, 2), Some(1));
    let results = compute_competition_results(&[], &[game]);
    assert!(results.players.is_empty());
    assert!(results.pairs.is_empty());
}

#[test]
fn unfinished_games_are_ignored() {
    let roster = roster(&["a", "b", "c", "d"]);
    let mut pending = finished_game("g1", ["a", "b"], ["c", "d"], (3, 1), Some(1));
    pending.status = GameStatus::InProgress;

    let results = compute_competition_results(&roster, &[pending]);
    assert!(results.players.iter().all(|r| r.record.total_games == 0));
    assert!(results.pairs.is_empty());
}

#[test]
fn malformed_games_are_skipped_not_fatal() {
    let roster = roster(&["a", "b", "c", "d"]);

    let mut short_team = finished_game("bad-1", ["a", "b"], ["c", "d"], (6, 1), Some(1));
    short_team.team2.pop();
    let mut overlap = finished_game("bad-2", ["a", "b"], ["c", "d"], (6, 1), Some(1));
    overlap.team2[0] = overlap.team1[1].clone();
    let mut same_seat = finished_game("bad-3", ["a", "b"], ["c", "d"], (6, 1), Some(1));
    same_seat.team1[1] = same_seat.team1[0].clone();
    let bad_winner = finished_game("bad-4", ["a", "b"], ["c", "d"], (6, 1), Some(3));
    let good = finished_game("ok", ["a", "c"], ["b", "d"], (2, 6), Some(2));

    let results =
        compute_competition_results(&roster, &[short_team, overlap, same_seat, bad_winner, good]);

    for row in &results.players {
        assert_eq!(row.record.total_games, 1, "only the good game counts");
    }
    assert_eq!(results.pairs.len(), 2);
    assert_eq!(results.player(&pid("b")).unwrap().record.wins, 1);
    assert_eq!(results.player(&pid("a")).unwrap().record.losses, 1);
}

#[test]
fn draw_counts_games_but_no_wins() {
    let roster = roster(&["a", "b", "c", "d"]);
    let draw = finished_game("g1", ["a", "b"], ["c", "d"], (4, 4), None);

    let results = compute_competition_results(&roster, &[draw]);
    for row in &results.players {
        assert_eq!(row.record.total_games, 1);
        assert_eq!(row.record.wins, 0);
        assert_eq!(row.record.losses, 0);
        assert_eq!(row.record.draws, 1);
        assert_eq!(row.record.score, 4);
    }
    for pair in &results.pairs {
        assert_eq!(pair.record.draws, 1);
        assert_eq!(pair.record.wins, 0);
    }
}

#[test]
fn six_five_without_history_counts_as_comeback() {
    let roster = roster(&["a", "b", "c", "d"]);
    let game = finished_game("g1", ["a", "b"], ["c", "d"], (5, 6), Some(2));

    let results = compute_competition_results(&roster, &[game]);
    let c = results.player(&pid("c")).unwrap();
    assert_eq!(c.record.buchudas_de_re, 1);
    assert_eq!(c.record.buchudas, 0);
    assert_eq!(results.player(&pid("a")).unwrap().record.buchudas_de_re, 0);
}

#[test]
fn six_five_with_history_needs_the_deficit() {
    let rules = MatchRules::default();
    let roster = roster(&["a", "b", "c", "d"]);

    // 3-5 then 6-5: team1 never sat at zero against five.
    let mut game = new_game("g1", ["a", "b"], ["c", "d"]);
    register_round(&mut game, VictoryType::LaELo, Some(TeamSide::Team1), &rules).unwrap();
    register_round(&mut game, VictoryType::Cruzada, Some(TeamSide::Team2), &rules).unwrap();
    register_round(&mut game, VictoryType::Simple, Some(TeamSide::Team2), &rules).unwrap();
    register_round(&mut game, VictoryType::LaELo, Some(TeamSide::Team1), &rules).unwrap();
    assert_eq!((game.team1_score, game.team2_score), (6, 5));

    let results = compute_competition_results_with(&roster, &[game], &rules);
    assert_eq!(results.player(&pid("a")).unwrap().record.buchudas_de_re, 0);
    assert_eq!(results.player(&pid("a")).unwrap().record.wins, 1);
}

#[test]
fn comeback_needs_six_five_final_score() {
    let rules = MatchRules::default();
    let roster = roster(&["a", "b", "c", "d"]);

    // Trailed 0-5, then won 6-2: a plain win, not a buchuda de re.
    let mut game = new_game("g1", ["a", "b"], ["c", "d"]);
    adjust_score(&mut game, 0, 5, &rules).unwrap();
    adjust_score(&mut game, 6, 2, &rules).unwrap();
    assert_eq!(finish_game(&mut game), Outcome::Won(TeamSide::Team1));
    assert!(game.trailed_from_nil(TeamSide::Team1, &rules));
    assert_eq!(game.special_win(&rules), None);

    let results = compute_competition_results_with(&roster, &[game], &rules);
    let a = results.player(&pid("a")).unwrap();
    assert_eq!(a.record.wins, 1);
    assert_eq!(a.record.buchudas_de_re, 0);
    assert_eq!(results.pair(&pid("a"), &pid("b")).unwrap().record.buchudas_de_re, 0);

    // Same deficit, finished 6-5: counted.
    let mut reversal = new_game("g2", ["a", "b"], ["c", "d"]);
    adjust_score(&mut reversal, 0, 5, &rules).unwrap();
    adjust_score(&mut reversal, 6, 5, &rules).unwrap();
    finish_game(&mut reversal);
    assert_eq!(reversal.special_win(&rules), Some(SpecialWin::BuchudaDeRe));
}

#[test]
fn buchuda_only_credits_winning_side() {
    let roster = roster(&["a", "b", "c", "d"]);
    let game = finished_game("g1", ["a", "b"], ["c", "d"], (0, 6), Some(2));

    let results = compute_competition_results(&roster, &[game]);
    assert_eq!(results.player(&pid("c")).unwrap().record.buchudas, 1);
    assert_eq!(results.player(&pid("d")).unwrap().record.buchudas, 1);
    assert_eq!(results.player(&pid("a")).unwrap().record.buchudas, 0);
    assert_eq!(results.pair(&pid("c"), &pid("d")).unwrap().record.buchudas, 1);
    assert_eq!(results.pair(&pid("a"), &pid("b")).unwrap().record.buchudas, 0);
}

#[test]
fn off_roster_players_are_ignored_and_break_their_pair() {
    let roster = roster(&["a", "b", "c"]);
    let game = finished_game("g1", ["a", "b"], ["c", "ghost"], (6, 3), Some(1));

    let results = compute_competition_results(&roster, &[game]);
    assert_eq!(results.players.len(), 3);
    assert!(results.player(&pid("ghost")).is_none());
    assert_eq!(results.player(&pid("c")).unwrap().record.losses, 1);
    assert_eq!(results.pairs.len(), 1);
    assert_eq!(results.pairs[0].id.as_str(), "a-b");
}

#[test]
fn duplicate_roster_entries_appear_once() {
    let mut roster = roster(&["a", "b", "c", "d"]);
    roster.push(roster[0].clone());
    let results = compute_competition_results(&roster, &[]);
    assert_eq!(results.players.len(), 4);
}

#[test]
fn ties_keep_roster_order() {
    let roster = roster(&["d", "c", "b", "a"]);
    let g1 = finished_game("g1", ["d", "a"], ["c", "b"], (6, 2), Some(1));
    let g2 = finished_game("g2", ["c", "b"], ["d", "a"], (6, 2), Some(1));

    let results = compute_competition_results(&roster, &[g1, g2]);
    let order: Vec<&str> = results.players.iter().map(|r| r.player.id.as_str()).collect();
    assert_eq!(order, vec!["d", "c", "b", "a"]);
    let pair_order: Vec<&str> = results.pairs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(pair_order, vec!["a-d", "b-c"]);
}

#[test]
fn score_sums_team_points() {
    let roster = roster(&["a", "b", "c", "d"]);
    let g1 = finished_game("g1", ["a", "b"], ["c", "d"], (6, 3), Some(1));
    let g2 = finished_game("g2", ["a", "c"], ["b", "d"], (2, 6), Some(2));

    let results = compute_competition_results(&roster, &[g1, g2]);
    assert_eq!(results.player(&pid("a")).unwrap().record.score, 8);
    assert_eq!(results.player(&pid("d")).unwrap().record.score, 9);
}

#[test]
fn serializes_with_camel_case_counters() {
    let roster = roster(&["a", "b", "c", "d"]);
    let game = finished_game("g1", ["a", "b"], ["c", "d"], (6, 0), Some(1));
    let results = compute_competition_results(&roster, &[game]);

    let json = serde_json::to_value(&results).unwrap();
    let first = &json["players"][0];
    assert_eq!(first["id"], "a");
    assert_eq!(first["name"], "A");
    assert_eq!(first["buchudasDeRe"], 0);
    assert_eq!(first["winRate"], 100.0);
    assert_eq!(json["pairs"][0]["player1"]["id"], "a");
}
