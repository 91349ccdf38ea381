use strum::{AsRefStr, Display, EnumString};

use crate::model::id::CommunityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum CommunityRole {
    Member,
    #[strum(serialize = "AJK")]
    Ajk,
    Committee,
    Secretary,
    Treasurer,
    President,
    Advisor,
}

impl CommunityRole {
    // 所属コミュニティのイベントへのアクセスを与える役職
    pub fn is_leadership(self) -> bool {
        matches!(
            self,
            CommunityRole::President
                | CommunityRole::Secretary
                | CommunityRole::Treasurer
                | CommunityRole::Committee
                | CommunityRole::Ajk
        )
    }
}

// community_members.status。approved のみがアクセスに関与する
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MembershipStatus {
    Applied,
    Interviewing,
    Approved,
    Rejected,
    Inactive,
}

// approved 状態の所属一件。status は取得時にフィルタ済み
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovedMembership {
    pub community_id: CommunityId,
    pub role: CommunityRole,
}
