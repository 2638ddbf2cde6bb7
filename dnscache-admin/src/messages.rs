use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// Operator-facing strings. The id (`as_ref`) travels in URLs, the text is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Message {
    ConfirmDelete,
    DeleteFailed,
    InsertFailed,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::ConfirmDelete => "Сигурни ли сте?",
            Message::DeleteFailed => "Грешка при изтриване!",
            Message::InsertFailed => "Грешка при добавяне!",
        }
    }
}
