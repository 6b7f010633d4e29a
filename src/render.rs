use crate::volume::{Volume, VolumeList};
use std::fmt::Write;

pub const NO_MATCHES: &'static str = "No matching books were found.";

/// 저장소의 검색 결과 목록을 터미널 출력용 문자열로 만든다.
///
/// 아직 검색 전([`VolumeList::Empty`])이면 아무것도 출력하지 않고,
/// 검색 결과가 0건이면 결과 없음 문구를 출력한다.
pub fn render(list: &VolumeList) -> String {
    match list {
        VolumeList::Empty => String::new(),
        VolumeList::Populated(volumes) if volumes.is_empty() => format!("{}\n", NO_MATCHES),
        VolumeList::Populated(volumes) => volumes.iter()
            .enumerate()
            .map(|(index, volume)| render_volume(index + 1, volume))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_volume(no: usize, volume: &Volume) -> String {
    let mut out = String::new();

    // String에 대한 write!는 실패하지 않는다.
    let _ = writeln!(out, "{}. {}", no, volume.title());
    if !volume.authors().is_empty() {
        let _ = writeln!(out, "   {}", volume.authors().join(", "));
    }
    if let Some(isbn) = volume.isbn() {
        let _ = writeln!(out, "   ISBN: {}", isbn);
    }
    if let Some(thumbnail) = volume.thumbnail() {
        let _ = writeln!(out, "   {}", thumbnail);
    }

    out
}
