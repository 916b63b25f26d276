//! Notification categories, message composition and dispatch.

mod category;
mod composer;
mod gateway;
mod types;

pub use category::{CategoryProfile, DeliveryShape, NotificationCategory, ADMIN_TOPIC};
pub use composer::{compose, require_token, AdHocNotification, MessageBuilder};
pub use gateway::{DeliveryError, DispatchGateway, MessagingProvider};
pub use types::{
    AndroidConfig, AndroidNotification, AndroidPriority, ApnsConfig, ApnsPayload, Aps, Message,
    NotificationTarget, Receipt, VisibleNotification,
};
