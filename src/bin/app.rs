use std::env;
use std::str::FromStr;

use adapter::database::connect_database_with;
use anyhow::{bail, Context, Result};
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::logging::init_logger;

// 指定ユーザーが操作できるイベント ID の一覧を表示する運用向けユーティリティ
#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;

    let Some(arg) = env::args().nth(1) else {
        bail!("usage: app <user-id>");
    };
    let user_id = UserId::from_str(&arg).context("ユーザー ID の形式が不正です")?;

    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);
    let registry = AppRegistry::new(pool);

    let events = registry
        .access_resolver()
        .resolve_accessible_events(user_id)
        .await?;

    tracing::info!(%user_id, count = events.len(), "accessible events resolved");
    for event_id in &events {
        println!("{event_id}");
    }

    Ok(())
}
