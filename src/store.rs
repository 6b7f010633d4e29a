use crate::volume::VolumeList;

/// 가장 최근 검색 결과를 보관하는 저장소
///
/// # Description
/// 생성 시점에는 [`VolumeList::Empty`] 상태이며, 검색이 성공할 때마다 목록 전체가 교체된다.
/// 병합이나 추가는 하지 않고 새 목록이 어떤 검색어의 결과인지도 확인하지 않는다.
/// 먼저 보낸 요청의 응답이 나중에 도착하면 최신 결과를 덮어쓸 수 있다.
///
/// 전역 상태가 아니라 필요한 곳에 참조로 전달해서 사용한다.
#[derive(Debug, Default)]
pub struct VolumeStore {
    list: VolumeList,
}

impl VolumeStore {
    pub fn new() -> Self {
        VolumeStore::default()
    }

    pub fn replace(&mut self, list: VolumeList) {
        self.list = list;
    }

    pub fn current(&self) -> &VolumeList {
        &self.list
    }
}
