use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

/// 本 crate 所有公开操作的统一返回别名。
pub type Result<T> = std::result::Result<T, Error>;

/// SharePoint Graph 调用的错误分类。
///
/// `Precondition` 表示必填标识符缺失，此时尚未发出任何网络请求；
/// `Api` 表示服务端返回了预期之外的状态码，原始响应体保留在 `body` 中。
/// 其余变体是传输层与本地环境的失败，原样向上传递。
#[derive(Debug, Error)]
pub enum Error {
    /// 必填标识符为空或缺失。
    #[error("{0}")]
    Precondition(&'static str),

    /// Graph API 返回了该操作接受集合之外的状态码。
    #[error("graph api returned HTTP {status} while {operation}: {body}")]
    Api {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// 请求发送或响应体解析失败。
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// 本地文件读取失败。
    #[error("failed to read local file: {0}")]
    Io(#[from] std::io::Error),

    /// 构造客户端时 base URL 不合法。
    #[error("invalid graph base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// access token 含有不能放进 HTTP 头的字符。
    #[error("access token is not a valid header value: {0}")]
    Token(#[from] InvalidHeaderValue),
}
