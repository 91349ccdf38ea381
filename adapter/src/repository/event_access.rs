use async_trait::async_trait;
use derive_new::new;
use uuid::Uuid;

use kernel::model::{
    community::{ApprovedMembership, MembershipStatus},
    crew::CrewStatus,
    id::{CommunityId, EventId, UserId},
};
use kernel::repository::event_access::EventAccessRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::event_access::MembershipRow, ConnectionPool};

#[derive(new)]
pub struct EventAccessRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventAccessRepository for EventAccessRepositoryImpl {
    // 主催者としてのイベント一覧を取得する
    async fn find_events_by_organizer(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        sqlx::query_scalar::<_, EventId>(
            r#"
                SELECT event_id
                FROM events
                WHERE organizer_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    // accepted 状態のクルーとして参加しているイベント一覧を取得する。
    // type（talent / crew）による区別はない。
    // user_id が NULL の招待枠は WHERE 句の一致条件で自然に除外される
    async fn find_accepted_crew_events(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        sqlx::query_scalar::<_, EventId>(
            r#"
                SELECT event_id
                FROM event_crews
                WHERE user_id = $1
                  AND status = $2
            "#,
        )
        .bind(user_id)
        .bind(CrewStatus::Accepted.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    // approved 状態のコミュニティ所属一覧を取得する
    async fn find_approved_memberships(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<ApprovedMembership>> {
        let rows: Vec<MembershipRow> = sqlx::query_as(
            r#"
                SELECT community_id, role
                FROM community_members
                WHERE user_id = $1
                  AND status = $2
            "#,
        )
        .bind(user_id)
        .bind(MembershipStatus::Approved.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(ApprovedMembership::try_from).collect()
    }

    // 指定コミュニティ群が主催するイベント一覧を取得する
    async fn find_events_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> AppResult<Vec<EventId>> {
        if community_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = community_ids.iter().map(|id| id.raw()).collect();

        sqlx::query_scalar::<_, EventId>(
            r#"
                SELECT event_id
                FROM events
                WHERE community_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
