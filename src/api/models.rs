use crate::api::error::{Error, Result};

/// 文档库的寻址方式。
///
/// 同一个操作既可以直接落在某个 drive 上，也可以经由站点
/// 落在该站点的默认文档库上，两种形态的 URL 前缀不同。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriveAddress {
    /// 直接以 drive id 寻址，形如 `/drives/{id}`。
    Drive(String),
    /// 以 site id 寻址站点默认 drive，形如 `/sites/{id}/drive`。
    Site(String),
}

impl DriveAddress {
    pub fn drive(id: impl Into<String>) -> Self {
        DriveAddress::Drive(id.into())
    }

    pub fn site(id: impl Into<String>) -> Self {
        DriveAddress::Site(id.into())
    }

    /// 拼出 drive 作用域的 URL 前缀。
    pub(crate) fn drive_path(&self, base: &str) -> String {
        match self {
            DriveAddress::Drive(id) => format!("{base}/drives/{id}"),
            DriveAddress::Site(id) => format!("{base}/sites/{id}/drive"),
        }
    }

    /// 标识符为空视为前置条件不满足，调用方不得发起请求。
    pub(crate) fn ensure_id(&self) -> Result<()> {
        let (id, message) = match self {
            DriveAddress::Drive(id) => (id, "drive id is required"),
            DriveAddress::Site(id) => (id, "site id is required"),
        };
        if id.trim().is_empty() {
            return Err(Error::Precondition(message));
        }
        Ok(())
    }
}

/// 创建文件夹遇到同名项时交给 Graph 的处理策略。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConflictBehavior {
    /// 同名即报错。
    #[default]
    Fail,
    /// 覆盖同名项。
    Replace,
    /// 自动改名避让。
    Rename,
}

/// 分享链接的形态。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkType {
    /// 只读链接。
    #[default]
    View,
    /// 可编辑链接。
    Edit,
    /// 可嵌入页面的链接。
    Embed,
}

/// 分享链接的可见范围。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkScope {
    /// 任何拿到链接的人。
    Anonymous,
    /// 仅组织内成员。
    #[default]
    Organization,
    /// 仅显式授权的用户。
    Users,
}

/// 列目录时保留的精简记录，远端的其余元数据一律丢弃。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriveItemSummary {
    pub id: String,
    pub name: String,
}
