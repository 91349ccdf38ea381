use std::collections::HashSet;
use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::AccessProfile};
use shared::error::AppError;

// users の読み取りに使う型。
// 旧来の role 列（単数）と roles 列（複数）の両方がまだ残っている
#[derive(sqlx::FromRow)]
pub struct UserAccessRow {
    pub user_id: UserId,
    pub role: String,
    pub roles: Option<Vec<String>>,
    pub is_organizer_approved: bool,
}

// role 列と roles 列はここで単一のロール集合へ正規化する。
// カーネル側には正規化済みのビューだけを渡す
impl TryFrom<UserAccessRow> for AccessProfile {
    type Error = AppError;

    fn try_from(value: UserAccessRow) -> Result<Self, Self::Error> {
        let UserAccessRow {
            user_id,
            role,
            roles,
            is_organizer_approved,
        } = value;

        let role = parse_role(&role)?;
        let mut role_set: HashSet<Role> = HashSet::new();
        role_set.insert(role);
        for name in roles.unwrap_or_default() {
            role_set.insert(parse_role(&name)?);
        }

        Ok(AccessProfile {
            user_id,
            role,
            roles: role_set,
            is_organizer_approved,
        })
    }
}

fn parse_role(name: &str) -> Result<Role, AppError> {
    Role::from_str(name)
        .map_err(|_| AppError::ConversionEntityError(format!("未知のロールです: {name}")))
}
