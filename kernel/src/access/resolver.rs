use std::collections::HashSet;
use std::sync::Arc;

use derive_new::new;
use shared::error::AppResult;

use crate::model::{
    event::Event,
    id::{CommunityId, EventId, UserId},
};
use crate::repository::{event_access::EventAccessRepository, user::UserRepository};

// イベントへのアクセス可否を三つの関係（主催・クルー・コミュニティ役職）から解決する。
// 状態は持たず、呼び出しごとに現在の関係を読み直す
#[derive(new, Clone)]
pub struct AccessResolver {
    event_access_repository: Arc<dyn EventAccessRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl AccessResolver {
    // ユーザーが操作できるイベント ID の集合を求める。
    // 三つの読み取りは互いに独立なので並行に発行し、最後に和集合をとる
    pub async fn resolve_accessible_events(
        &self,
        user_id: UserId,
    ) -> AppResult<HashSet<EventId>> {
        let (owned, crewed, community_events) = tokio::try_join!(
            self.event_access_repository.find_events_by_organizer(user_id),
            self.event_access_repository.find_accepted_crew_events(user_id),
            self.resolve_leadership_events(user_id),
        )?;

        let mut events: HashSet<EventId> = HashSet::new();
        events.extend(owned);
        events.extend(crewed);
        events.extend(community_events);

        tracing::debug!(%user_id, count = events.len(), "accessible events resolved");

        Ok(events)
    }

    // 単一イベントに対する可否判定。
    // resolve_accessible_events の集合所属と同じ結果を返すが、
    // イベントの読み取りモデルが手元にある前提で読み取り回数を減らしている
    pub async fn has_event_access(&self, user_id: UserId, event: &Event) -> AppResult<bool> {
        // ① 主催者はフィールド比較だけで確定する
        if event.organizer_id == user_id {
            return Ok(true);
        }

        // ② クルー所属と ③ コミュニティ役職は独立に読み取れる
        let (crewed, communities) = tokio::try_join!(
            self.event_access_repository.find_accepted_crew_events(user_id),
            self.qualifying_communities(user_id),
        )?;

        if crewed.contains(&event.event_id) {
            return Ok(true);
        }

        match event.community_id {
            Some(community_id) => Ok(communities.contains(&community_id)),
            // 主催コミュニティの無いイベントへは主催かクルー経由でしか到達できない
            None => Ok(false),
        }
    }

    // コミュニティ役職経由で到達できるイベント一覧
    async fn resolve_leadership_events(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        let communities = self.qualifying_communities(user_id).await?;
        if communities.is_empty() {
            return Ok(Vec::new());
        }
        self.event_access_repository
            .find_events_by_communities(&communities)
            .await
    }

    // アクセスを与える所属コミュニティの一覧。
    // is_organizer_approved のユーザーは役職に関係なく所属全コミュニティが対象になる
    async fn qualifying_communities(&self, user_id: UserId) -> AppResult<Vec<CommunityId>> {
        let (profile, memberships) = tokio::try_join!(
            self.user_repository.find_access_profile(user_id),
            self.event_access_repository.find_approved_memberships(user_id),
        )?;

        // 未知のユーザーは承認フラグ無しとして扱う。エラーにはしない
        let organizer_approved = profile.map(|p| p.is_organizer_approved).unwrap_or(false);

        let communities = memberships
            .into_iter()
            .filter(|m| organizer_approved || m.role.is_leadership())
            .map(|m| m.community_id)
            .collect();

        Ok(communities)
    }
}
