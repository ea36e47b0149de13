//! SharePoint 文档库（Microsoft Graph v1.0）的阻塞式客户端。
//! 覆盖六类文档操作：创建文件夹、列出 drive 子项、上传文件、
//! 创建分享链接、删除文件，以及分页读取站点 list 的 item。
//!
//! access token 由调用方提供，本 crate 不负责获取或刷新；
//! 每个操作独立发起一次（或分页时多次）HTTP 请求，不重试、不缓存。
//!
//! ```no_run
//! use sharepoint_graph::{ConflictBehavior, DriveAddress, SharePointClient};
//!
//! # fn main() -> Result<(), sharepoint_graph::Error> {
//! let client = SharePointClient::new("<access token>")?;
//! let address = DriveAddress::drive("b!drive-id");
//! let folder_id =
//!     client.create_folder(&address, "Reports", "root-item-id", ConflictBehavior::Fail)?;
//! println!("created folder {folder_id}");
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use api::client::SharePointClient;
pub use api::error::{Error, Result};
pub use api::models::{ConflictBehavior, DriveAddress, DriveItemSummary, LinkScope, LinkType};
pub use api::GRAPH_BASE;
