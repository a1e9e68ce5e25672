use async_trait::async_trait;
use league::domain::{Competition, CompetitionId, CompetitionStatus, Player, TeamSide, VictoryType};
use league::errors::ErrorCode;
use league::repos::CompetitionRepo;
use league::{CompetitionService, DomainError, MatchRules, MemoryStore};
use league_test_support::fixtures::{pid, team, CompetitionFixture};

use crate::common::{harness, Harness};

async fn play_shutout(h: &Harness, id: &CompetitionId) -> Result<(), DomainError> {
    let game = h.games.create(id, team("a", "b"), team("c", "d")).await?;
    for _ in 0..2 {
        h.games
            .register_round(&game.id, VictoryType::Cruzada, Some(TeamSide::Team1))
            .await?;
    }
    Ok(())
}

#[tokio::test]
async fn start_requires_minimum_members() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c"])
        .outsiders(&["d"])
        .seed(&h.store)?;

    let err = h.competitions.start(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotEnoughMembers);

    h.store.add_member(&id, &pid("d"))?;
    let started = h.competitions.start(&id).await?;
    assert_eq!(started.status, CompetitionStatus::InProgress);
    assert!(started.start_date.is_some());

    let stored = CompetitionRepo::find_by_id(&h.store, &id).await?;
    assert_eq!(stored.status, CompetitionStatus::InProgress);
    Ok(())
}

#[tokio::test]
async fn start_twice_is_a_phase_mismatch() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c", "d"])
        .seed(&h.store)?;

    h.competitions.start(&id).await?;
    let err = h.competitions.start(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
    Ok(())
}

#[tokio::test]
async fn finish_closes_competition_and_returns_standings() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c", "d"])
        .seed(&h.store)?;
    h.competitions.start(&id).await?;

    let open = h.games.create(&id, team("a", "c"), team("b", "d")).await?;
    play_shutout(&h, &id).await?;
    assert!(!h.competitions.can_finish(&id).await?);
    let err = h.competitions.finish(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GamesPending);

    h.games.adjust_score(&open.id, 2, 4).await?;
    h.games.finish(&open.id).await?;
    assert!(h.competitions.can_finish(&id).await?);

    let results = h.competitions.finish(&id).await?;
    let a = results.player(&pid("a")).unwrap();
    assert_eq!(a.record.total_games, 2);
    assert_eq!(a.record.wins, 1);
    assert_eq!(a.record.losses, 1);
    assert_eq!(a.record.buchudas, 1);
    assert_eq!(results.pair(&pid("b"), &pid("d")).unwrap().record.wins, 1);

    let stored = CompetitionRepo::find_by_id(&h.store, &id).await?;
    assert_eq!(stored.status, CompetitionStatus::Finished);
    assert!(!h.competitions.can_finish(&id).await?);
    Ok(())
}

#[tokio::test]
async fn finish_without_games_is_rejected() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c", "d"])
        .seed(&h.store)?;

    let err = h.competitions.finish(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);

    h.competitions.start(&id).await?;
    let err = h.competitions.finish(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoGames);
    Ok(())
}

#[tokio::test]
async fn results_list_roster_before_any_game() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["d", "a", "c", "b"])
        .seed(&h.store)?;

    let results = h.competitions.results(&id).await?;
    let ids: Vec<&str> = results.players.iter().map(|r| r.player.id.as_str()).collect();
    assert_eq!(ids, vec!["d", "a", "c", "b"]);
    assert!(results.pairs.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_competition_is_not_found() {
    let h = harness();
    let err = h
        .competitions
        .results(&CompetitionId::from("nope"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CompetitionNotFound);
}

#[tokio::test]
async fn fetch_failures_surface_as_infra_errors() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c", "d"])
        .seed(&h.store)?;

    h.store.set_fail_reads(true);
    let err = h.competitions.results(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::FetchFailed);
    assert!(err.is_infra());
    Ok(())
}

/// Delegates to the store but cannot read rosters.
struct MembersUnavailable(MemoryStore);

#[async_trait]
impl CompetitionRepo for MembersUnavailable {
    async fn find_by_id(&self, id: &CompetitionId) -> Result<Competition, DomainError> {
        CompetitionRepo::find_by_id(&self.0, id).await
    }

    async fn list_members(&self, _id: &CompetitionId) -> Result<Vec<Player>, DomainError> {
        Err(DomainError::fetch_failed("members unavailable"))
    }

    async fn update_status(&self, competition: &Competition) -> Result<(), DomainError> {
        CompetitionRepo::update_status(&self.0, competition).await
    }
}

#[tokio::test]
async fn failed_roster_read_leaves_competition_open() -> Result<(), DomainError> {
    let h = harness();
    let id = CompetitionFixture::new("c-1")
        .members(&["a", "b", "c", "d"])
        .seed(&h.store)?;
    h.competitions.start(&id).await?;
    play_shutout(&h, &id).await?;

    let broken = CompetitionService::new(
        MembersUnavailable(h.store.clone()),
        h.store.clone(),
        MatchRules::default(),
    );
    let err = broken.finish(&id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::FetchFailed);

    let stored = CompetitionRepo::find_by_id(&h.store, &id).await?;
    assert_eq!(stored.status, CompetitionStatus::InProgress);

    let results = h.competitions.finish(&id).await?;
    assert_eq!(results.player(&pid("a")).unwrap().record.wins, 1);
    Ok(())
}
