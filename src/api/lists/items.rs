use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::api::client::{expect_status, SharePointClient};
use crate::api::error::{Error, Result};

impl SharePointClient {
    /// 分页读取站点 list 的全部 item，展开 columns 与 fields，返回原始记录。
    ///
    /// - `order_by` 与 `top` 原样拼进 `$orderby` / `$top`；
    /// - 沿 `@odata.nextLink` 逐页取，直到取尽或达到 `page_limit` 页；
    /// - 任何一页状态码非 200 即整体失败，已取到的页不返回。
    pub fn get_list_items(
        &self,
        site_id: &str,
        list_id: &str,
        order_by: Option<&str>,
        top: Option<u32>,
        page_limit: Option<usize>,
    ) -> Result<Vec<Value>> {
        if site_id.trim().is_empty() || list_id.trim().is_empty() {
            return Err(Error::Precondition("site id and list id are required"));
        }

        let mut url = format!(
            "{}/sites/{site_id}/lists/{list_id}/items?expand=columns,items(expand=fields)",
            self.base_url
        );
        if let Some(order_by) = order_by {
            url.push_str(&format!("&$orderby={order_by}"));
        }
        if let Some(top) = top {
            url.push_str(&format!("&$top={top}"));
        }

        let walker = PageWalker::new(url, page_limit, |page_url: &str| {
            self.fetch_list_page(page_url)
        });

        let mut items = Vec::new();
        for page in walker {
            items.extend(page?);
        }
        Ok(items)
    }

    fn fetch_list_page(&self, url: &str) -> Result<ListPage> {
        let response = self.http.get(url).send()?;
        let response = expect_status(response, &[StatusCode::OK], "fetching list items")?;
        let payload: ListItemsPageDto = response.json()?;
        Ok(ListPage {
            items: payload.value,
            next_link: payload.next_link,
        })
    }
}

/// 一页 item 与服务器给出的下一页完整链接。
struct ListPage {
    items: Vec<Value>,
    next_link: Option<String>,
}

/// 惰性分页游标：每次迭代取一页，产生错误后立即终止。
///
/// 终止条件是链接取尽或已取页数达到 `page_limit`；
/// `page_limit` 为 Some(0) 时一页也不取。
struct PageWalker<F> {
    next_url: Option<String>,
    pages_fetched: usize,
    page_limit: Option<usize>,
    fetch: F,
}

impl<F> PageWalker<F>
where
    F: FnMut(&str) -> Result<ListPage>,
{
    fn new(first_url: String, page_limit: Option<usize>, fetch: F) -> Self {
        PageWalker {
            next_url: Some(first_url),
            pages_fetched: 0,
            page_limit,
            fetch,
        }
    }
}

impl<F> Iterator for PageWalker<F>
where
    F: FnMut(&str) -> Result<ListPage>,
{
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.page_limit {
            if self.pages_fetched >= limit {
                return None;
            }
        }
        let url = self.next_url.take()?;
        match (self.fetch)(&url) {
            Ok(page) => {
                self.pages_fetched += 1;
                self.next_url = page.next_link;
                Some(Ok(page.items))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListItemsPageDto {
    value: Vec<Value>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}
