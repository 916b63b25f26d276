//! Message composition for both delivery shapes.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::content::SelectedContent;
use crate::error::{AppError, Result};

use super::category::{DeliveryShape, NotificationCategory};
use super::types::{
    AndroidConfig, AndroidNotification, AndroidPriority, ApnsConfig, ApnsPayload, Aps, Message,
    NotificationTarget, VisibleNotification,
};

const DEFAULT_SOUND: &str = "default";

/// Builder for provider messages
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    target: NotificationTarget,
    notification: Option<VisibleNotification>,
    data: BTreeMap<String, String>,
    priority: Option<AndroidPriority>,
    channel_id: Option<String>,
    sound: bool,
}

impl MessageBuilder {
    pub fn new(target: NotificationTarget) -> Self {
        Self {
            target,
            notification: None,
            data: BTreeMap::new(),
            priority: None,
            channel_id: None,
            sound: false,
        }
    }

    /// Add the visible title/body block
    pub fn visible(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.notification = Some(VisibleNotification {
            title: title.into(),
            body: body.into(),
        });
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn data_map(mut self, data: BTreeMap<String, String>) -> Self {
        self.data.extend(data);
        self
    }

    pub fn priority(mut self, priority: AndroidPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Android channel, played with the default sound
    pub fn channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Default sound on both platforms
    pub fn with_sound(mut self) -> Self {
        self.sound = true;
        self
    }

    pub fn build(self) -> Message {
        let android_notification = self.channel_id.map(|channel_id| AndroidNotification {
            channel_id,
            sound: DEFAULT_SOUND.to_string(),
        });

        let android = if self.priority.is_some() || android_notification.is_some() {
            Some(AndroidConfig {
                priority: self.priority,
                notification: android_notification,
            })
        } else {
            None
        };

        let apns = self.sound.then(|| ApnsConfig {
            payload: ApnsPayload {
                aps: Aps {
                    sound: DEFAULT_SOUND.to_string(),
                },
            },
        });

        Message {
            notification: self.notification,
            data: self.data,
            android,
            apns,
            target: self.target,
        }
    }
}

/// Compose a category message from drawn content.
pub fn compose(
    category: NotificationCategory,
    content: SelectedContent,
    target: NotificationTarget,
) -> Message {
    let profile = category.profile();

    let builder = match profile.shape {
        DeliveryShape::DataOnly => MessageBuilder::new(target)
            .data("title", content.title)
            .data("body", content.body)
            .data("channel_id", profile.channel_id)
            .priority(AndroidPriority::High),
        DeliveryShape::Visible => MessageBuilder::new(target)
            .visible(content.title, content.body)
            .channel(profile.channel_id)
            .with_sound(),
    };

    profile
        .flags
        .iter()
        .fold(builder.data("destination", profile.destination), |b, (k, v)| {
            b.data(*k, *v)
        })
        .build()
}

/// Turn an optional caller-supplied token into a unicast target.
pub fn require_token(token: Option<String>) -> Result<NotificationTarget> {
    non_empty(token)
        .map(NotificationTarget::Token)
        .ok_or_else(|| AppError::Validation("Missing token".to_string()))
}

/// Caller-supplied notification for ad-hoc sends to a single device.
#[derive(Debug, Default, Deserialize)]
pub struct AdHocNotification {
    pub token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

impl AdHocNotification {
    /// Validate and compose a visible message addressed to `token`.
    pub fn compose(self) -> Result<Message> {
        let (Some(token), Some(title), Some(body)) = (
            non_empty(self.token),
            non_empty(self.title),
            non_empty(self.body),
        ) else {
            return Err(AppError::Validation(
                "Missing token, title or body".to_string(),
            ));
        };

        let data = self
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, stringify(value)))
            .collect();

        Ok(MessageBuilder::new(NotificationTarget::Token(token))
            .visible(title, body)
            .data_map(data)
            .priority(AndroidPriority::High)
            .with_sound()
            .build())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// FCM data values must be strings.
fn stringify(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
