use reqwest::StatusCode;

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::{Error, Result};
use crate::api::models::DriveAddress;

impl SharePointClient {
    /// 删除指定文件。请求直接按 `file_id` 寻址并遵循 `address` 的作用域；
    /// `_folder_id` 只保留调用形状，不参与请求。
    pub fn delete_file(
        &self,
        address: &DriveAddress,
        _folder_id: &str,
        file_id: &str,
    ) -> Result<()> {
        address.ensure_id()?;
        if file_id.trim().is_empty() {
            return Err(Error::Precondition("file id is required"));
        }

        let url = format!("{}/items/{file_id}", address.drive_path(&self.base_url));
        let response = self.http.delete(url).send()?;
        expect_status(
            response,
            &[StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT],
            "deleting file",
        )?;
        Ok(())
    }
}
