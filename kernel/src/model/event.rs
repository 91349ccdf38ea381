use strum::{AsRefStr, Display, EnumString};

use crate::model::id::{CommunityId, EventId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    // approved が一般公開された状態にあたる
    pub fn is_published(self) -> bool {
        matches!(self, EventStatus::Approved)
    }
}

// アクセス判定に必要な列だけを持つイベントの読み取りモデル。
// organizer_id は必ず一人、community_id は主催コミュニティが無ければ None
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub organizer_id: UserId,
    pub community_id: Option<CommunityId>,
    pub status: EventStatus,
}
