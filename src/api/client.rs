use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use url::Url;

use crate::api::error::{Error, Result};
use crate::api::GRAPH_BASE;

/// SharePoint 文档库操作的阻塞式 Graph 客户端。
///
/// Authorization 与 Content-Type 头在构造时算好一次，
/// 之后的每个请求都复用同一个连接池与默认头。
#[derive(Clone, Debug)]
pub struct SharePointClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl SharePointClient {
    /// 以正式 Graph v1.0 入口构造客户端。
    pub fn new(access_token: &str) -> Result<Self> {
        Self::with_base_url(access_token, GRAPH_BASE)
    }

    /// 指定自定义入口（主权云或测试桩）构造客户端。
    pub fn with_base_url(access_token: &str, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)?;
        let base_url = parsed.as_str().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {access_token}"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .redirect(Policy::limited(10))
            .build()?;

        Ok(SharePointClient { http, base_url })
    }
}

/// 状态码落在接受集合内则原样返回响应，
/// 否则读出原始响应体并转为 [`Error::Api`]。
pub(crate) fn expect_status(
    response: Response,
    accepted: &[StatusCode],
    operation: &'static str,
) -> Result<Response> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.text()?;
    Err(Error::Api {
        operation,
        status,
        body,
    })
}
