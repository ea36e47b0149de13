use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::{Error, Result};
use crate::api::models::{ConflictBehavior, DriveAddress};

impl SharePointClient {
    /// 在指定父目录下创建文件夹，返回新文件夹的 item id。
    ///
    /// 同名冲突交给 Graph 按 `conflict` 策略处理，本地不做判断。
    pub fn create_folder(
        &self,
        address: &DriveAddress,
        folder_name: &str,
        parent_item_id: &str,
        conflict: ConflictBehavior,
    ) -> Result<String> {
        address.ensure_id()?;
        if parent_item_id.trim().is_empty() {
            return Err(Error::Precondition("parent item id is required"));
        }

        let url = format!(
            "{}/items/{parent_item_id}/children",
            address.drive_path(&self.base_url)
        );
        let body = CreateFolderRequest {
            name: folder_name,
            folder: FolderFacet {},
            conflict_behavior: conflict.as_graph_str(),
        };

        let response = self.http.post(url).json(&body).send()?;
        let response = expect_status(
            response,
            &[StatusCode::OK, StatusCode::CREATED],
            "creating folder",
        )?;

        let created: CreatedItemDto = response.json()?;
        Ok(created.id)
    }
}

impl ConflictBehavior {
    fn as_graph_str(&self) -> &'static str {
        match self {
            ConflictBehavior::Fail => "fail",
            ConflictBehavior::Replace => "replace",
            ConflictBehavior::Rename => "rename",
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateFolderRequest<'a> {
    name: &'a str,
    /// Graph 以空的 folder facet 标记“创建的是文件夹”。
    folder: FolderFacet,
    #[serde(rename = "@microsoft.graph.conflictBehavior")]
    conflict_behavior: &'static str,
}

#[derive(Debug, Serialize)]
struct FolderFacet {}

#[derive(Debug, Deserialize)]
struct CreatedItemDto {
    id: String,
}
