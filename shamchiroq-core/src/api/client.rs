//! reqwest 实现

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::session::SessionSubject;
use crate::traits::ResourceFetcher;
use crate::types::PageResponse;

/// 请求超时
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 错误响应体在错误信息中保留的最大字符数
const MAX_ERROR_BODY: usize = 200;

/// 共享的 HTTP 客户端
///
/// 持有 base URL 和会话主体；每次请求时读取当前 token。
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionSubject,
}

impl ApiClient {
    /// 创建客户端
    ///
    /// `base_url` 不是合法的 http(s) URL 时返回 `CoreError::Configuration`。
    pub fn new(base_url: &str, session: SessionSubject) -> CoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::Configuration(format!("invalid API URL {base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CoreError::Configuration(format!(
                "unsupported API URL scheme: {}",
                base_url.scheme()
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 为某个列表接口创建 fetcher
    pub fn resource<T>(&self, path: &'static str) -> Arc<RestResource<T>> {
        Arc::new(RestResource {
            client: self.clone(),
            path,
            _marker: PhantomData,
        })
    }

    /// 拼出分页请求 URL
    pub fn page_url(&self, path: &str, page_index: u32, page_size: u32) -> CoreResult<Url> {
        let joined = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| CoreError::Configuration(format!("invalid endpoint {joined}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("page", &page_index.to_string())
            .append_pair("limit", &page_size.to_string());
        Ok(url)
    }

    /// 执行分页 GET 请求
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page_index: u32,
        page_size: u32,
    ) -> CoreResult<PageResponse<T>> {
        let token = self.session.token().ok_or(CoreError::Unauthorized)?;
        let url = self.page_url(path, page_index, page_size)?;
        log::debug!("GET {url}");

        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response.text().await?;
        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("JSON 解析失败: {e}");
            log::debug!("原始响应: {body}");
            CoreError::from(e)
        })
    }
}

/// 非 2xx 响应转为错误
fn error_for_status(status: StatusCode, body: &str) -> CoreError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return CoreError::Unauthorized;
    }
    let message: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
    CoreError::Api {
        status: status.as_u16(),
        message: if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            message
        },
    }
}

/// 单个列表接口
pub struct RestResource<T> {
    client: ApiClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestResource<T> {
    pub fn path(&self) -> &'static str {
        self.path
    }
}

#[async_trait]
impl<T> ResourceFetcher<T> for RestResource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch_page(&self, page_index: u32, page_size: u32) -> CoreResult<PageResponse<T>> {
        self.client.get_page(self.path, page_index, page_size).await
    }
}
