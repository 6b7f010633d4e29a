use crate::provider::api::google_books::{IndustryIdentifier, Item, SearchResponse};
use crate::volume::{Volume, VolumeList};

/// 외부 API 응답을 [`VolumeList`]로 정규화한다.
///
/// # Description
/// 결과는 항상 [`VolumeList::Populated`]이며 응답의 도서 순서를 그대로 유지한다.
/// `items`가 없으면 도서가 0건인 목록이 된다.
///
/// 각 필드의 기본값
/// - 제목이 없으면 빈 문자열
/// - 저자가 없으면 빈 목록
/// - 썸네일이 없으면 [`None`]
/// - ID가 없으면 응답 내 위치로 `unknown-{index}` 형태의 ID를 만든다.
pub fn normalize(response: SearchResponse) -> VolumeList {
    let volumes = response.items
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, item)| to_volume(index, item))
        .collect::<Vec<_>>();

    VolumeList::Populated(volumes)
}

fn to_volume(index: usize, item: Item) -> Volume {
    let id = item.id.unwrap_or_else(|| format!("unknown-{}", index));
    let info = item.volume_info.unwrap_or_default();

    let mut builder = Volume::builder()
        .id(id)
        .title(info.title.unwrap_or_default())
        .authors(info.authors.unwrap_or_default());

    if let Some(isbn) = info.industry_identifiers.as_deref().and_then(find_isbn) {
        builder = builder.isbn(isbn);
    }

    if let Some(thumbnail) = info.image_links.and_then(|links| links.thumbnail) {
        builder = builder.thumbnail(thumbnail);
    }

    builder.build()
}

/// ISBN13을 우선으로 하고 없으면 ISBN10을 사용한다.
fn find_isbn(identifiers: &[IndustryIdentifier]) -> Option<String> {
    let find = |kind: &str| {
        identifiers.iter()
            .find(|i| i.kind.as_deref() == Some(kind))
            .and_then(|i| i.identifier.clone())
    };

    find("ISBN_13").or_else(|| find("ISBN_10"))
}
