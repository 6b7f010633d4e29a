use std::fmt;
use std::fmt::{Display, Formatter};

pub mod google_books;

pub use google_books::SearchResponse;

/// 검색 요청 중 발생한 에러
///
/// # Description
/// 호출자에게 노출되는 에러는 이 타입 하나뿐이다.
/// 네트워크 오류, 2xx 이외의 응답, 응답 본문 읽기 실패, 응답 파싱 실패가 모두 여기로 변환된다.
/// 일시적 오류와 영구적 오류는 구분하지 않으며 재시도하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFailure {
    InvalidBaseUrl(String),
    RequestFailed(String),
    UnsuccessfulStatus(u16),
    ResponseTextExtractionFailed(String),
    ResponseParseFailed(String),
}

impl Display for SearchFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchFailure::InvalidBaseUrl(url) => write!(f, "Invalid base url: {}", url),
            SearchFailure::RequestFailed(message) => write!(f, "Request failed: {}", message),
            SearchFailure::UnsuccessfulStatus(status) => write!(f, "HTTP error: {}", status),
            SearchFailure::ResponseTextExtractionFailed(message) => write!(f, "Failed to read response: {}", message),
            SearchFailure::ResponseParseFailed(message) => write!(f, "Failed to parse response: {}", message),
        }
    }
}

impl std::error::Error for SearchFailure {}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    InvalidParameter(String),
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RequestError {}

/// 도서 검색 요청
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    query: String,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    query: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        RequestBuilder::default()
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    /// 검색어가 빈 문자열인지는 검사하지 않는다. 빈 검색어를 막는 것은 호출하는 쪽의 책임이다.
    pub fn build(self) -> Result<Request, RequestError> {
        let query = self.query.ok_or_else(||
            RequestError::InvalidParameter("query is required".to_string()))?;

        Ok(Request { query })
    }
}

/// 외부 도서 검색 API 클라이언트
///
/// 요청은 한 번만 보내며 완료될 때까지 대기한다. 취소와 재시도는 지원하지 않는다.
pub trait Client {
    fn search(&self, request: &Request) -> Result<SearchResponse, SearchFailure>;
}
