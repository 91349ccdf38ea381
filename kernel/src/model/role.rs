use strum::{AsRefStr, Display, EnumString};

// プラットフォーム全体のロール。users.role / users.roles の文字列と対応する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Student,
    Organizer,
    Admin,
    Staff,
}
