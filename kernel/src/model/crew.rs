use strum::{AsRefStr, Display, EnumString};

// event_crews.status。accepted のみがアクセスを与える
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CrewStatus {
    Invited,
    Accepted,
    Rejected,
    Applied,
}
