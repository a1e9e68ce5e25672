use crate::config::rules::MatchRules;
use crate::domain::test_helpers::{competition, finished_game, new_game, pid, roster};
use crate::domain::{
    can_finish_competition, ensure_can_start, finish_eligibility, validate_new_game,
    CompetitionStatus,
};
use crate::errors::ErrorCode;

#[test]
fn start_requires_four_members() {
    let rules = MatchRules::default();
    let pending = competition(CompetitionStatus::Pending);

    let err = ensure_can_start(&pending, 3, &rules).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotEnoughMembers);
    assert!(ensure_can_start(&pending, 4, &rules).is_ok());
    assert!(ensure_can_start(&pending, 9, &rules).is_ok());
}

#[test]
fn start_only_from_pending() {
    let rules = MatchRules::default();
    for status in [CompetitionStatus::InProgress, CompetitionStatus::Finished] {
        let err = ensure_can_start(&competition(status), 8, &rules).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PhaseMismatch);
    }
}

#[test]
fn finish_needs_games_all_finished() {
    let running = competition(CompetitionStatus::InProgress);

    let err = finish_eligibility(&running, &[]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoGames);

    let done = finished_game("g1", ["a", "b"], ["c", "d"], (6, 2), Some(1));
    let open = new_game("g2", ["a", "c"], ["b", "d"]);
    let err = finish_eligibility(&running, &[done.clone(), open]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::GamesPending);

    assert!(can_finish_competition(&running, &[done.clone()]));
    assert!(!can_finish_competition(
        &competition(CompetitionStatus::Pending),
        &[done]
    ));
}

#[test]
fn new_game_teams_must_come_from_roster() {
    let running = competition(CompetitionStatus::InProgress);
    let members = roster(&["a", "b", "c", "d", "e"]);

    let t1 = vec![pid("a"), pid("b")];
    let t2 = vec![pid("c"), pid("e")];
    let lineup = validate_new_game(&running, &members, &t1, &t2).unwrap();
    assert_eq!(lineup.team2, [&pid("c"), &pid("e")]);

    let outsider = vec![pid("c"), pid("zed")];
    let err = validate_new_game(&running, &members, &t1, &outsider).unwrap_err();
    assert_eq!(err.code(), ErrorCode::PlayerNotInRoster);

    let three = vec![pid("c"), pid("d"), pid("e")];
    let err = validate_new_game(&running, &members, &t1, &three).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTeam);

    let overlapping = vec![pid("b"), pid("c")];
    let err = validate_new_game(&running, &members, &t1, &overlapping).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTeam);
}

#[test]
fn new_game_needs_running_competition() {
    let pending = competition(CompetitionStatus::Pending);
    let members = roster(&["a", "b", "c", "d"]);
    let err = validate_new_game(
        &pending,
        &members,
        &[pid("a"), pid("b")],
        &[pid("c"), pid("d")],
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
}
