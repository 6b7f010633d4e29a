use crate::provider;
use crate::provider::api::{Request, SearchFailure};
use reqwest::{blocking, Url};
use serde::Deserialize;
use tracing::debug;

/// Google Books 검색 API 엔드포인트 URL
pub const GOOGLE_BOOKS_ENDPOINT: &'static str = "https://www.googleapis.com/books/v1/volumes";

/// Google Books 검색 API 응답
///
/// # Description
/// 응답의 모든 필드는 생략될 수 있으므로 전부 [`Option`]으로 받는다.
/// 검색 결과가 없을 때는 `items` 필드 자체가 내려오지 않는다.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchResponse {
    /// 검색된 도서 목록
    #[serde(rename = "items")]
    pub items: Option<Vec<Item>>,
}

/// 검색된 도서 한 건
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Item {
    /// Google Books 도서 ID
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct VolumeInfo {
    #[serde(rename = "title")]
    pub title: Option<String>,
    #[serde(rename = "authors")]
    pub authors: Option<Vec<String>>,
    /// ISBN 등의 식별자 목록
    #[serde(rename = "industryIdentifiers")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    #[serde(rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct IndustryIdentifier {
    /// `ISBN_10`, `ISBN_13`, `OTHER` 중 하나
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "identifier")]
    pub identifier: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ImageLinks {
    #[serde(rename = "thumbnail")]
    pub thumbnail: Option<String>,
}

/// Google Books API 클라이언트
///
/// 인증 정보와 별도의 헤더 없이 검색어만 쿼리 파라미터(`q`)로 전달한다.
/// 타임아웃은 reqwest 기본값을 그대로 사용한다.
pub struct Client {
    endpoint: String,
    client: blocking::Client,
}

impl Client {
    pub fn new<S: Into<String>>(endpoint: S) -> Result<Self, SearchFailure> {
        let client = blocking::Client::builder()
            .build()
            .map_err(|e| SearchFailure::RequestFailed(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl provider::api::Client for Client {
    fn search(&self, request: &Request) -> Result<SearchResponse, SearchFailure> {
        let url = build_search_url(&self.endpoint, request)?;
        debug!("GET {}", url);

        let response = self.client.get(url)
            .send()
            .map_err(|err| SearchFailure::RequestFailed(format!("QUERY: {}, ERROR: {}", request.query(), error_chain(&err))))?;

        if !response.status().is_success() {
            return Err(SearchFailure::UnsuccessfulStatus(response.status().as_u16()));
        }

        let text = response.text()
            .map_err(|err| SearchFailure::ResponseTextExtractionFailed(error_chain(&err)))?;

        serde_json::from_str::<SearchResponse>(&text)
            .map_err(|err| SearchFailure::ResponseParseFailed(err.to_string()))
    }
}

/// reqwest 에러의 `Display`는 최상위 메시지만 출력하므로 원인(source)까지 이어 붙인다.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn build_search_url(endpoint: &str, request: &Request) -> Result<Url, SearchFailure> {
    Url::parse(endpoint)
        .map_err(|_| SearchFailure::InvalidBaseUrl(endpoint.to_owned()))
        .map(|mut url| {
            url.query_pairs_mut()
                .append_pair("q", request.query());
            url
        })
}
