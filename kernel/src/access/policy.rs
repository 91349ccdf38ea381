use std::collections::HashSet;

use shared::error::{AppError, AppResult};

use crate::access::resolver::AccessResolver;
use crate::model::{event::Event, id::UserId, role::Role, user::AccessProfile};

// 認可判定の対象となる操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessAction {
    ViewEvent,
    EditEvent,
    DeleteEvent,
    ManageCrew,
    ViewRegistrations,
    Broadcast(BroadcastAudience),
}

// ブロードキャストの宛先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BroadcastAudience {
    // 対象イベントの参加者・クルー向け
    Participants,
    // 全学生向け。イベント単位のアクセスとは別にロールでも制限する
    Students,
}

// 認可判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

// 拒否理由。この三値以外は増やさない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    NotAuthorized,
    ActionRestricted,
}

impl DenyReason {
    // 呼び出し側がレスポンスへ変換するためのエラー表現
    pub fn into_app_error(self) -> AppError {
        match self {
            DenyReason::NotAuthenticated => AppError::UnauthenticatedError,
            DenyReason::NotAuthorized => AppError::UnauthorizedError,
            DenyReason::ActionRestricted => AppError::ForbiddenOperation,
        }
    }
}

// 認証済みユーザーの持つロール情報。検証済みのクレームから呼び出し側が組み立てる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
    pub roles: HashSet<Role>,
}

impl Actor {
    pub fn holds(&self, role: Role) -> bool {
        self.role == role || self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.holds(Role::Admin)
    }
}

impl From<AccessProfile> for Actor {
    fn from(value: AccessProfile) -> Self {
        let AccessProfile {
            user_id,
            role,
            roles,
            is_organizer_approved: _,
        } = value;
        Self {
            user_id,
            role,
            roles,
        }
    }
}

impl AccessResolver {
    // 操作ごとの認可判定。ルールは番号の順で適用する。
    // 対象イベントの存在確認は呼び出し側の責務で、ここには存在するものだけが渡る
    pub async fn authorize(
        &self,
        actor: &Actor,
        action: AccessAction,
        target: &Event,
    ) -> AppResult<Decision> {
        // ① admin はすべての操作を無条件に許可する
        if actor.is_admin() {
            return Ok(Decision::Allow);
        }

        match action {
            // ② 削除は admin 専用。主催者でも不可
            AccessAction::DeleteEvent => Ok(Decision::Deny(DenyReason::ActionRestricted)),
            // ④ 公開済みイベントの閲覧は誰でも可。未公開は関係者のみ
            AccessAction::ViewEvent => {
                if target.status.is_published() {
                    return Ok(Decision::Allow);
                }
                self.decide_by_event_access(actor, target).await
            }
            // ⑤ 全学生向けブロードキャストは organizer ロールも要求する
            AccessAction::Broadcast(BroadcastAudience::Students) => {
                if !actor.holds(Role::Organizer) {
                    return Ok(Decision::Deny(DenyReason::ActionRestricted));
                }
                self.decide_by_event_access(actor, target).await
            }
            // ③ イベント単位の操作はアクセス関係の有無で決まる
            AccessAction::EditEvent
            | AccessAction::ManageCrew
            | AccessAction::ViewRegistrations
            | AccessAction::Broadcast(BroadcastAudience::Participants) => {
                self.decide_by_event_access(actor, target).await
            }
        }
    }

    async fn decide_by_event_access(&self, actor: &Actor, target: &Event) -> AppResult<Decision> {
        if self.has_event_access(actor.user_id, target).await? {
            Ok(Decision::Allow)
        } else {
            Ok(Decision::Deny(DenyReason::NotAuthorized))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::access::test_store::InMemoryRelationStore;
    use crate::model::{
        community::{CommunityRole, MembershipStatus},
        crew::CrewStatus,
        event::EventStatus,
        id::{CommunityId, EventId},
    };

    fn store_and_resolver() -> (Arc<InMemoryRelationStore>, AccessResolver) {
        let store = Arc::new(InMemoryRelationStore::new());
        let resolver = AccessResolver::new(store.clone(), store.clone());
        (store, resolver)
    }

    fn actor(user_id: UserId, role: Role) -> Actor {
        Actor {
            user_id,
            role,
            roles: HashSet::from([role]),
        }
    }

    fn event(organizer_id: UserId, status: EventStatus) -> Event {
        Event {
            event_id: EventId::new(),
            organizer_id,
            community_id: None,
            status,
        }
    }

    const ALL_ACTIONS: [AccessAction; 7] = [
        AccessAction::ViewEvent,
        AccessAction::EditEvent,
        AccessAction::DeleteEvent,
        AccessAction::ManageCrew,
        AccessAction::ViewRegistrations,
        AccessAction::Broadcast(BroadcastAudience::Participants),
        AccessAction::Broadcast(BroadcastAudience::Students),
    ];

    #[tokio::test]
    async fn admin_is_allowed_every_action() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        // admin とは無関係なイベント
        let target = event(UserId::new(), EventStatus::Pending);
        store.add_event(&target);

        // 主ロールが admin の場合
        let primary_admin = actor(UserId::new(), Role::Admin);
        // roles 集合側にだけ admin を持つ場合
        let secondary_admin = Actor {
            user_id: UserId::new(),
            role: Role::Staff,
            roles: HashSet::from([Role::Staff, Role::Admin]),
        };

        for action in ALL_ACTIONS {
            for admin in [&primary_admin, &secondary_admin] {
                let decision = resolver.authorize(admin, action, &target).await?;
                assert_eq!(decision, Decision::Allow, "action = {action:?}");
            }
        }

        Ok(())
    }

    #[tokio::test]
    async fn delete_event_is_admin_only() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        // 主催者本人であっても削除は許可されない
        let organizer = actor(UserId::new(), Role::Organizer);
        let target = event(organizer.user_id, EventStatus::Approved);
        store.add_event(&target);

        let decision = resolver
            .authorize(&organizer, AccessAction::DeleteEvent, &target)
            .await?;
        assert_eq!(decision, Decision::Deny(DenyReason::ActionRestricted));

        Ok(())
    }

    #[tokio::test]
    async fn event_scoped_actions_follow_event_access() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        let organizer = actor(UserId::new(), Role::Organizer);
        let stranger = actor(UserId::new(), Role::Student);
        let target = event(organizer.user_id, EventStatus::Pending);
        store.add_event(&target);

        let event_scoped = [
            AccessAction::EditEvent,
            AccessAction::ManageCrew,
            AccessAction::ViewRegistrations,
            AccessAction::Broadcast(BroadcastAudience::Participants),
        ];
        for action in event_scoped {
            let allowed = resolver.authorize(&organizer, action, &target).await?;
            assert_eq!(allowed, Decision::Allow, "action = {action:?}");

            let denied = resolver.authorize(&stranger, action, &target).await?;
            assert_eq!(
                denied,
                Decision::Deny(DenyReason::NotAuthorized),
                "action = {action:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn accepted_crew_may_edit() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        let crew = actor(UserId::new(), Role::Student);
        let target = event(UserId::new(), EventStatus::Pending);
        store.add_event(&target);
        store.add_crew(target.event_id, Some(crew.user_id), CrewStatus::Accepted);

        let decision = resolver
            .authorize(&crew, AccessAction::EditEvent, &target)
            .await?;
        assert_eq!(decision, Decision::Allow);

        Ok(())
    }

    #[tokio::test]
    async fn community_leader_may_manage_hosted_events() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        let leader = actor(UserId::new(), Role::Student);
        let community_id = CommunityId::new();
        let target = Event {
            event_id: EventId::new(),
            organizer_id: UserId::new(),
            community_id: Some(community_id),
            status: EventStatus::Pending,
        };
        store.add_event(&target);
        store.add_membership(
            community_id,
            leader.user_id,
            CommunityRole::President,
            MembershipStatus::Approved,
        );

        let decision = resolver
            .authorize(&leader, AccessAction::ManageCrew, &target)
            .await?;
        assert_eq!(decision, Decision::Allow);

        Ok(())
    }

    #[tokio::test]
    async fn approved_events_are_publicly_viewable() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        let stranger = actor(UserId::new(), Role::Student);
        let published = event(UserId::new(), EventStatus::Approved);
        store.add_event(&published);

        let decision = resolver
            .authorize(&stranger, AccessAction::ViewEvent, &published)
            .await?;
        assert_eq!(decision, Decision::Allow);

        Ok(())
    }

    #[tokio::test]
    async fn pending_events_are_visible_to_stakeholders_only() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        let organizer = actor(UserId::new(), Role::Organizer);
        let stranger = actor(UserId::new(), Role::Student);
        let pending = event(organizer.user_id, EventStatus::Pending);
        store.add_event(&pending);

        let decision = resolver
            .authorize(&organizer, AccessAction::ViewEvent, &pending)
            .await?;
        assert_eq!(decision, Decision::Allow);

        let decision = resolver
            .authorize(&stranger, AccessAction::ViewEvent, &pending)
            .await?;
        assert_eq!(decision, Decision::Deny(DenyReason::NotAuthorized));

        Ok(())
    }

    #[tokio::test]
    async fn students_broadcast_requires_organizer_role() -> anyhow::Result<()> {
        let (store, resolver) = store_and_resolver();

        // student ロールの主催者は、自分のイベントでも全学生向けには送れない
        let student_owner = actor(UserId::new(), Role::Student);
        let target = event(student_owner.user_id, EventStatus::Approved);
        store.add_event(&target);

        let decision = resolver
            .authorize(
                &student_owner,
                AccessAction::Broadcast(BroadcastAudience::Students),
                &target,
            )
            .await?;
        assert_eq!(decision, Decision::Deny(DenyReason::ActionRestricted));

        // 参加者向けであればイベントへのアクセスだけで足りる
        let decision = resolver
            .authorize(
                &student_owner,
                AccessAction::Broadcast(BroadcastAudience::Participants),
                &target,
            )
            .await?;
        assert_eq!(decision, Decision::Allow);

        // organizer ロールを持つ主催者は送れる
        let organizer_owner = actor(UserId::new(), Role::Organizer);
        let target = event(organizer_owner.user_id, EventStatus::Approved);
        store.add_event(&target);
        let decision = resolver
            .authorize(
                &organizer_owner,
                AccessAction::Broadcast(BroadcastAudience::Students),
                &target,
            )
            .await?;
        assert_eq!(decision, Decision::Allow);

        // organizer ロールがあってもイベントと無関係なら送れない
        let unrelated_organizer = actor(UserId::new(), Role::Organizer);
        let decision = resolver
            .authorize(
                &unrelated_organizer,
                AccessAction::Broadcast(BroadcastAudience::Students),
                &target,
            )
            .await?;
        assert_eq!(decision, Decision::Deny(DenyReason::NotAuthorized));

        Ok(())
    }

    #[test]
    fn deny_reason_converts_to_the_calling_layer_error() {
        assert!(matches!(
            DenyReason::NotAuthenticated.into_app_error(),
            AppError::UnauthenticatedError
        ));
        assert!(matches!(
            DenyReason::NotAuthorized.into_app_error(),
            AppError::UnauthorizedError
        ));
        assert!(matches!(
            DenyReason::ActionRestricted.into_app_error(),
            AppError::ForbiddenOperation
        ));
    }

    #[test]
    fn actor_is_built_from_access_profile() {
        let user_id = UserId::new();
        let profile = AccessProfile {
            user_id,
            role: Role::Student,
            roles: HashSet::from([Role::Student, Role::Organizer]),
            is_organizer_approved: true,
        };

        let actor = Actor::from(profile);
        assert_eq!(actor.user_id, user_id);
        assert!(actor.holds(Role::Organizer));
        assert!(!actor.is_admin());
    }
}
