use crate::provider::api::google_books;
use crate::provider::api::SearchFailure;

pub mod configs;
pub mod normalize;
pub mod provider;
pub mod render;
pub mod search;
pub mod store;
pub mod volume;

pub use search::Searcher;
pub use store::VolumeStore;
pub use volume::{Volume, VolumeList};

/// 설정된 엔드포인트로 Google Books 검색기를 생성한다.
pub fn create_google_books_searcher(config: &configs::AppConfig) -> Result<Searcher<google_books::Client>, SearchFailure> {
    let client = google_books::Client::new(config.endpoint())?;

    Ok(Searcher::new(client))
}
