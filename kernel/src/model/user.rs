use std::collections::HashSet;

use crate::model::{id::UserId, role::Role};

// users の role 列と roles 列をデータ読み込み境界で正規化したビュー。
// カーネルは生の列を直接参照しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessProfile {
    pub user_id: UserId,
    pub role: Role,
    pub roles: HashSet<Role>,
    pub is_organizer_approved: bool,
}

impl AccessProfile {
    pub fn holds(&self, role: Role) -> bool {
        self.role == role || self.roles.contains(&role)
    }
}
