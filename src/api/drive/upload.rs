use std::fs;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::Result;
use crate::api::models::DriveAddress;

impl SharePointClient {
    /// 把本地文件整体读入内存后单请求上传（简易上传，不分片），
    /// 落在 `parent_item_id` 目录下名为 `file_name` 的位置，返回新 item id。
    pub fn upload_file(
        &self,
        address: &DriveAddress,
        file_path: &Path,
        file_name: &str,
        parent_item_id: &str,
    ) -> Result<String> {
        address.ensure_id()?;

        let content = fs::read(file_path)?;
        let encoded_name = utf8_percent_encode(file_name.trim(), NON_ALPHANUMERIC).to_string();
        let url = format!(
            "{}/items/{parent_item_id}:/{encoded_name}:/content",
            address.drive_path(&self.base_url)
        );

        let response = self.http.put(url).body(content).send()?;
        let response = expect_status(
            response,
            &[StatusCode::OK, StatusCode::CREATED],
            "uploading file",
        )?;

        let uploaded: UploadedItemDto = response.json()?;
        Ok(uploaded.id)
    }
}

#[derive(Debug, Deserialize)]
struct UploadedItemDto {
    id: String,
}
