use crate::normalize::normalize;
use crate::provider::api::{Client, Request, SearchFailure};
use crate::store::VolumeStore;
use crate::volume::VolumeList;
use tracing::{error, info};

/// 검색 요청, 정규화, 저장소 교체를 순서대로 수행한다.
pub struct Searcher<C>
where
    C: Client,
{
    client: C,
}

impl<C> Searcher<C>
where
    C: Client,
{
    pub fn new(client: C) -> Self {
        Searcher { client }
    }

    /// 검색에 성공하면 저장소의 목록을 교체하고 교체된 목록을 반환한다.
    /// 실패하면 저장소는 그대로 두고 에러를 반환한다.
    pub fn search<'a>(&self, store: &'a mut VolumeStore, request: &Request) -> Result<&'a VolumeList, SearchFailure> {
        info!("Searching for '{}'", request.query());
        let response = self.client.search(request)
            .map_err(|e| {
                error!("QUERY: {}, ERROR: {}", request.query(), e);
                e
            })?;

        let list = normalize(response);
        info!("Found {} volumes for '{}'", list.len(), request.query());

        store.replace(list);
        Ok(store.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::api::SearchResponse;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// 미리 준비한 결과를 순서대로 돌려주는 클라이언트
    struct MockClient {
        results: RefCell<VecDeque<Result<&'static str, SearchFailure>>>,
        queries: Rc<RefCell<Vec<String>>>,
    }

    impl MockClient {
        fn new(results: Vec<Result<&'static str, SearchFailure>>) -> (Self, Rc<RefCell<Vec<String>>>) {
            let queries = Rc::new(RefCell::new(vec![]));
            let client = MockClient {
                results: RefCell::new(results.into()),
                queries: queries.clone(),
            };
            (client, queries)
        }
    }

    impl Client for MockClient {
        fn search(&self, request: &Request) -> Result<SearchResponse, SearchFailure> {
            self.queries.borrow_mut().push(request.query().to_owned());
            self.results.borrow_mut()
                .pop_front()
                .expect("no more prepared results")
                .map(|json| serde_json::from_str(json).unwrap())
        }
    }

    fn request(query: &str) -> Request {
        Request::builder().query(query).build().unwrap()
    }

    #[test]
    fn successful_search_replaces_store() {
        let (client, queries) = MockClient::new(vec![
            Ok(r#"{"items":[{"volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#),
        ]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        let list = searcher.search(&mut store, &request("dune")).unwrap();

        assert_eq!(1, list.len());
        let volume = &store.current().volumes().unwrap()[0];
        assert_eq!("Dune", volume.title());
        assert_eq!(vec!["Frank Herbert"], volume.authors());
        assert_eq!(None, volume.thumbnail());
        assert_eq!(vec!["dune".to_owned()], *queries.borrow());
    }

    #[test]
    fn query_is_passed_unchanged() {
        let (client, queries) = MockClient::new(vec![Ok("{}")]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        searcher.search(&mut store, &request("  frank herbert ")).unwrap();

        assert_eq!(vec!["  frank herbert ".to_owned()], *queries.borrow());
    }

    #[test]
    fn no_results_populates_store_with_zero_volumes() {
        let (client, _) = MockClient::new(vec![Ok("{}")]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        searcher.search(&mut store, &request("zzzznoresults")).unwrap();

        assert_eq!(&VolumeList::Populated(vec![]), store.current());
    }

    #[test]
    fn failure_leaves_store_unchanged() {
        let (client, _) = MockClient::new(vec![
            Ok(r#"{"items":[{"volumeInfo":{"title":"Dune"}}]}"#),
            Err(SearchFailure::RequestFailed("connection refused".to_owned())),
        ]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        searcher.search(&mut store, &request("dune")).unwrap();
        let before = store.current().clone();
        let result = searcher.search(&mut store, &request("neuromancer"));

        assert_eq!(Err(SearchFailure::RequestFailed("connection refused".to_owned())), result.map(|l| l.clone()));
        assert_eq!(&before, store.current());
    }

    #[test]
    fn failure_before_any_search_keeps_store_uninitialized() {
        let (client, _) = MockClient::new(vec![Err(SearchFailure::UnsuccessfulStatus(503))]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        let result = searcher.search(&mut store, &request("dune"));

        assert!(result.is_err());
        assert_eq!(&VolumeList::Empty, store.current());
    }

    #[test]
    fn later_search_replaces_earlier_results() {
        let (client, _) = MockClient::new(vec![
            Ok(r#"{"items":[{"volumeInfo":{"title":"Dune"}},{"volumeInfo":{"title":"Dune Messiah"}}]}"#),
            Ok(r#"{"items":[{"volumeInfo":{"title":"Neuromancer"}}]}"#),
        ]);
        let searcher = Searcher::new(client);
        let mut store = VolumeStore::new();

        searcher.search(&mut store, &request("dune")).unwrap();
        searcher.search(&mut store, &request("neuromancer")).unwrap();

        let titles = store.current().volumes().unwrap().iter().map(|v| v.title()).collect::<Vec<_>>();
        assert_eq!(vec!["Neuromancer"], titles);
    }
}
