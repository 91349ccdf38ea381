use async_trait::async_trait;
use derive_new::new;

use kernel::model::{id::UserId, user::AccessProfile};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserAccessRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーのアクセス属性を取得する。見つからない場合は None を返し、
    // エラーにするかどうかは呼び出し側に委ねる
    async fn find_access_profile(&self, user_id: UserId) -> AppResult<Option<AccessProfile>> {
        let row: Option<UserAccessRow> = sqlx::query_as(
            r#"
                SELECT user_id, role, roles, is_organizer_approved
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(AccessProfile::try_from).transpose()
    }
}
