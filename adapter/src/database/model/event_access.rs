use std::str::FromStr;

use kernel::model::{
    community::{ApprovedMembership, CommunityRole},
    id::CommunityId,
};
use shared::error::AppError;

// community_members の読み取りに使う型。status は検索時にフィルタ済み
#[derive(sqlx::FromRow)]
pub struct MembershipRow {
    pub community_id: CommunityId,
    pub role: String,
}

impl TryFrom<MembershipRow> for ApprovedMembership {
    type Error = AppError;

    fn try_from(value: MembershipRow) -> Result<Self, Self::Error> {
        let MembershipRow { community_id, role } = value;
        let role = CommunityRole::from_str(&role).map_err(|_| {
            AppError::ConversionEntityError(format!("未知のコミュニティ役職です: {role}"))
        })?;
        Ok(ApprovedMembership { community_id, role })
    }
}
