use std::sync::Mutex;

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    community::{ApprovedMembership, CommunityRole, MembershipStatus},
    crew::CrewStatus,
    event::Event,
    id::{CommunityId, EventId, UserId},
    user::AccessProfile,
};
use crate::repository::{event_access::EventAccessRepository, user::UserRepository};

// テスト用のインメモリ関係ストア。
// レコードを生のまま保持して各クエリでフィルタするので、
// ステータス変更が次の呼び出しへ即時に反映される
#[derive(Default)]
pub struct InMemoryRelationStore {
    inner: Mutex<Relations>,
}

#[derive(Default)]
struct Relations {
    events: Vec<EventRecord>,
    crews: Vec<CrewRecord>,
    memberships: Vec<MembershipRecord>,
    users: Vec<AccessProfile>,
}

struct EventRecord {
    event_id: EventId,
    organizer_id: UserId,
    community_id: Option<CommunityId>,
}

struct CrewRecord {
    event_id: EventId,
    // 招待枠（プレースホルダー）はユーザー未確定
    user_id: Option<UserId>,
    status: CrewStatus,
}

struct MembershipRecord {
    community_id: CommunityId,
    user_id: UserId,
    role: CommunityRole,
    status: MembershipStatus,
}

impl InMemoryRelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&self, event: &Event) {
        self.inner.lock().unwrap().events.push(EventRecord {
            event_id: event.event_id,
            organizer_id: event.organizer_id,
            community_id: event.community_id,
        });
    }

    pub fn add_crew(&self, event_id: EventId, user_id: Option<UserId>, status: CrewStatus) {
        self.inner.lock().unwrap().crews.push(CrewRecord {
            event_id,
            user_id,
            status,
        });
    }

    pub fn set_crew_status(&self, event_id: EventId, user_id: UserId, status: CrewStatus) {
        let mut inner = self.inner.lock().unwrap();
        for crew in inner
            .crews
            .iter_mut()
            .filter(|c| c.event_id == event_id && c.user_id == Some(user_id))
        {
            crew.status = status;
        }
    }

    pub fn add_membership(
        &self,
        community_id: CommunityId,
        user_id: UserId,
        role: CommunityRole,
        status: MembershipStatus,
    ) {
        self.inner.lock().unwrap().memberships.push(MembershipRecord {
            community_id,
            user_id,
            role,
            status,
        });
    }

    pub fn add_user(&self, profile: AccessProfile) {
        self.inner.lock().unwrap().users.push(profile);
    }

    pub fn set_organizer_approved(&self, user_id: UserId, approved: bool) {
        let mut inner = self.inner.lock().unwrap();
        for user in inner.users.iter_mut().filter(|u| u.user_id == user_id) {
            user.is_organizer_approved = approved;
        }
    }
}

#[async_trait]
impl EventAccessRepository for InMemoryRelationStore {
    async fn find_events_by_organizer(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .events
            .iter()
            .filter(|e| e.organizer_id == user_id)
            .map(|e| e.event_id)
            .collect())
    }

    async fn find_accepted_crew_events(&self, user_id: UserId) -> AppResult<Vec<EventId>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .crews
            .iter()
            .filter(|c| c.user_id == Some(user_id) && c.status == CrewStatus::Accepted)
            .map(|c| c.event_id)
            .collect())
    }

    async fn find_approved_memberships(
        &self,
        user_id: UserId,
    ) -> AppResult<Vec<ApprovedMembership>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id && m.status == MembershipStatus::Approved)
            .map(|m| ApprovedMembership {
                community_id: m.community_id,
                role: m.role,
            })
            .collect())
    }

    async fn find_events_by_communities(
        &self,
        community_ids: &[CommunityId],
    ) -> AppResult<Vec<EventId>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .events
            .iter()
            .filter(|e| {
                e.community_id
                    .map(|id| community_ids.contains(&id))
                    .unwrap_or(false)
            })
            .map(|e| e.event_id)
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryRelationStore {
    async fn find_access_profile(&self, user_id: UserId) -> AppResult<Option<AccessProfile>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.user_id == user_id).cloned())
    }
}
