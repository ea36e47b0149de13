use reqwest::StatusCode;
use serde::Deserialize;

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::{Error, Result};
use crate::api::models::DriveItemSummary;

impl SharePointClient {
    /// 列出 drive 根目录（`item_id` 为 None 或空串时）或指定目录的直接子项。
    ///
    /// 远端记录只保留 id 与 name 两个字段，单次请求不跟随分页。
    pub fn list_drive_items(
        &self,
        drive_id: &str,
        item_id: Option<&str>,
    ) -> Result<Vec<DriveItemSummary>> {
        if drive_id.trim().is_empty() {
            return Err(Error::Precondition("drive id is required"));
        }

        let item_id = item_id.map(str::trim).filter(|id| !id.is_empty());
        let url = match item_id {
            Some(id) => format!("{}/drives/{drive_id}/items/{id}/children", self.base_url),
            None => format!("{}/drives/{drive_id}/root/children", self.base_url),
        };

        let response = self.http.get(url).send()?;
        let response = expect_status(
            response,
            &[StatusCode::OK, StatusCode::CREATED],
            "listing drive items",
        )?;

        let payload: DriveChildrenResponse = response.json()?;
        Ok(payload
            .value
            .into_iter()
            .map(DriveItemSummary::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DriveChildrenResponse {
    value: Vec<DriveChildDto>,
}

#[derive(Debug, Deserialize)]
struct DriveChildDto {
    id: String,
    name: String,
}

impl From<DriveChildDto> for DriveItemSummary {
    fn from(value: DriveChildDto) -> Self {
        DriveItemSummary {
            id: value.id,
            name: value.name,
        }
    }
}
