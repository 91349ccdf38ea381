use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    community::ApprovedMembership,
    id::{CommunityId, EventId, UserId},
};

#[async_trait]
pub trait EventAccessRepository: Send + Sync {
    // 主催者として持っているイベント ID 一覧を取得する
    async fn find_events_by_organizer(&self, user_id: UserId) -> AppResult<Vec<EventId>>;
    // accepted 状態のクルーとして参加しているイベント ID 一覧を取得する
    async fn find_accepted_crew_events(&self, user_id: UserId) -> AppResult<Vec<EventId>>;
    // approved 状態のコミュニティ所属一覧を取得する
    async fn find_approved_memberships(&self, user_id: UserId)
        -> AppResult<Vec<ApprovedMembership>>;
    // 指定コミュニティ群が主催するイベント ID 一覧を取得する
    async fn find_events_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> AppResult<Vec<EventId>>;
}
