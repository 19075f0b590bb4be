//! The four top-level screens the navigator can show.

pub mod chat;
pub mod feed;
pub mod filter;
pub mod home;

pub use chat::ChatScreen;
pub use feed::FeedScreen;
pub use filter::FilterScreen;
pub use home::HomeScreen;
