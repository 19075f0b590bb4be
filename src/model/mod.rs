//! Domain models for CommunityHub.
//!
//! These types are UI-independent:
//! - [`Service`] / [`ServiceKind`] - the community service directory entries
//! - [`LocationFilter`] - the user's chosen geographic scope
//! - [`User`] - the signed-in member
//! - [`Post`] - feed entries inside a service interface
//! - [`Conversation`] / [`ChatMessage`] - mock messaging

pub mod chat;
pub mod filter;
pub mod post;
pub mod service;
pub mod user;

pub use chat::{ChatMessage, Conversation, Delivery};
pub use filter::{FilterField, LocationFilter};
pub use post::Post;
pub use service::{Service, ServiceKind};
pub use user::User;
