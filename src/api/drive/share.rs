use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::{Error, Result};
use crate::api::models::{DriveAddress, LinkScope, LinkType};

impl SharePointClient {
    /// 为指定 item 创建分享链接，返回响应里的 webUrl。
    ///
    /// 链接形态与可见范围原样透传给 Graph，由租户策略决定是否放行。
    pub fn create_shareable_link(
        &self,
        address: &DriveAddress,
        item_id: &str,
        link_type: LinkType,
        scope: LinkScope,
    ) -> Result<String> {
        address.ensure_id()?;
        if item_id.trim().is_empty() {
            return Err(Error::Precondition("item id is required"));
        }

        let url = format!(
            "{}/items/{item_id}/createLink",
            address.drive_path(&self.base_url)
        );
        let body = CreateLinkRequest {
            link_type: link_type.as_graph_str(),
            scope: scope.as_graph_str(),
        };

        let response = self.http.post(url).json(&body).send()?;
        let response = expect_status(
            response,
            &[StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED],
            "creating share link",
        )?;

        let payload: PermissionDto = response.json()?;
        Ok(payload.link.web_url)
    }
}

impl LinkType {
    fn as_graph_str(&self) -> &'static str {
        match self {
            LinkType::View => "view",
            LinkType::Edit => "edit",
            LinkType::Embed => "embed",
        }
    }
}

impl LinkScope {
    fn as_graph_str(&self) -> &'static str {
        match self {
            LinkScope::Anonymous => "anonymous",
            LinkScope::Organization => "organization",
            LinkScope::Users => "users",
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateLinkRequest {
    #[serde(rename = "type")]
    link_type: &'static str,
    scope: &'static str,
}

#[derive(Debug, Deserialize)]
struct PermissionDto {
    link: LinkDto,
}

#[derive(Debug, Deserialize)]
struct LinkDto {
    #[serde(rename = "webUrl")]
    web_url: String,
}
