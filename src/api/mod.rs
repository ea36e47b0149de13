pub mod client;
pub mod drive;
pub mod error;
pub mod lists;
pub mod models;

pub use client::SharePointClient;
pub use error::{Error, Result};
pub use models::{ConflictBehavior, DriveAddress, DriveItemSummary, LinkScope, LinkType};

/// Microsoft Graph v1.0 的正式入口地址。
pub const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";
