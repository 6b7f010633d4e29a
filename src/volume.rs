/// 검색 결과 한 건에 대응하는 도서 정보
///
/// # Description
/// 외부 API 응답을 정규화한 결과로 생성 이후 변경되지 않는다.
/// 개별 도서가 수정되는 일은 없으며 목록([`VolumeList`]) 단위로 교체된다.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Volume {
    id: String,
    title: String,
    authors: Vec<String>,
    isbn: Option<String>,
    thumbnail: Option<String>,
}

impl Volume {
    pub fn builder() -> VolumeBuilder {
        VolumeBuilder::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }
}

/// Volume 빌더
///
/// 설정되지 않은 값은 기본값으로 채워지므로 빌드는 실패하지 않는다.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VolumeBuilder {
    id: Option<String>,
    title: Option<String>,
    authors: Vec<String>,
    isbn: Option<String>,
    thumbnail: Option<String>,
}

impl VolumeBuilder {
    pub fn new() -> Self {
        VolumeBuilder::default()
    }

    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn isbn<S: Into<String>>(mut self, isbn: S) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn thumbnail<S: Into<String>>(mut self, thumbnail: S) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn build(self) -> Volume {
        Volume {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            authors: self.authors,
            isbn: self.isbn,
            thumbnail: self.thumbnail,
        }
    }
}

/// 검색 결과 목록
///
/// # Description
/// 아직 검색이 완료되지 않은 상태([`VolumeList::Empty`])와
/// 검색이 완료된 상태([`VolumeList::Populated`])를 구분한다.
/// 검색 결과가 0건이어도 `Populated`이며, 이 구분으로 "아직 검색 전"과 "검색 결과 없음"을 나누어 표시한다.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum VolumeList {
    #[default]
    Empty,

    /// API가 반환한 순서를 그대로 유지한다.
    Populated(Vec<Volume>),
}

impl VolumeList {
    pub fn is_populated(&self) -> bool {
        matches!(self, VolumeList::Populated(_))
    }

    pub fn volumes(&self) -> Option<&[Volume]> {
        match self {
            VolumeList::Empty => None,
            VolumeList::Populated(volumes) => Some(volumes),
        }
    }

    pub fn len(&self) -> usize {
        self.volumes().map_or(0, |v| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
