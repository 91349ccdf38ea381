use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::UserId, user::AccessProfile};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザーのアクセス属性（正規化済みロール集合と承認フラグ）を取得する
    async fn find_access_profile(&self, user_id: UserId) -> AppResult<Option<AccessProfile>>;
}
