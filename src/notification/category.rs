use std::fmt;

use serde::{Deserialize, Serialize};

/// Notification categories known to the relay.
///
/// Each category fixes the content pool, the broadcast topic, the Android
/// channel and the delivery shape used when it is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationCategory {
    /// Daily Hukamnama at Amrit Vela
    MorningScripture,
    /// Rehras Sahib in the evening
    EveningScripture,
    /// Kirtan Sohila before sleep
    NightScripture,
    AdminPost,
    AdminCopyright,
}

/// How a message is presented on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryShape {
    /// System tray notification; the app does not need to be running.
    Visible,
    /// No visible block; wakes the app to handle the data map itself.
    DataOnly,
}

/// Routing and presentation fixed per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub topic: &'static str,
    pub channel_id: &'static str,
    pub shape: DeliveryShape,
    /// In-app screen the client opens when handling the message
    pub destination: &'static str,
    /// Category specific flags merged into the data map
    pub flags: &'static [(&'static str, &'static str)],
    /// Confirmation returned to the caller on success
    pub confirmation: &'static str,
}

pub const ADMIN_TOPIC: &str = "admin";

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 5] = [
        NotificationCategory::MorningScripture,
        NotificationCategory::EveningScripture,
        NotificationCategory::NightScripture,
        NotificationCategory::AdminPost,
        NotificationCategory::AdminCopyright,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::MorningScripture => "morning-scripture",
            NotificationCategory::EveningScripture => "evening-scripture",
            NotificationCategory::NightScripture => "night-scripture",
            NotificationCategory::AdminPost => "admin-post",
            NotificationCategory::AdminCopyright => "admin-copyright",
        }
    }

    pub fn profile(&self) -> CategoryProfile {
        match self {
            NotificationCategory::MorningScripture => CategoryProfile {
                topic: "hukamnama",
                channel_id: "bhg_hukamnama_channel",
                shape: DeliveryShape::DataOnly,
                destination: "hukamnama",
                flags: &[],
                confirmation: "Hukamnama sent",
            },
            NotificationCategory::EveningScripture => CategoryProfile {
                topic: "daily-path",
                channel_id: "bhg_path_channel",
                shape: DeliveryShape::DataOnly,
                destination: "pathradio",
                flags: &[("playSpecial", "true")],
                confirmation: "Path sent",
            },
            NotificationCategory::NightScripture => CategoryProfile {
                topic: "night-path",
                channel_id: "bhg_night_path",
                shape: DeliveryShape::Visible,
                destination: "path",
                flags: &[],
                confirmation: "Night Path sent",
            },
            NotificationCategory::AdminPost => CategoryProfile {
                topic: ADMIN_TOPIC,
                channel_id: "bhg_admin_channel",
                shape: DeliveryShape::Visible,
                destination: "admin-post",
                flags: &[],
                confirmation: "Admin post notification sent",
            },
            NotificationCategory::AdminCopyright => CategoryProfile {
                topic: ADMIN_TOPIC,
                channel_id: "bhg_admin_channel",
                shape: DeliveryShape::Visible,
                destination: "copyright-request",
                flags: &[],
                confirmation: "Copyright request notification sent",
            },
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
