use book_search::provider::api::{Client, Request};
use book_search::{configs, render, Searcher, VolumeStore};
use clap::Parser;
use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::error;

/// Google Books 도서 검색
#[derive(Debug, Parser)]
#[command(name = "book-search", version, about)]
struct Argument {
    /// 검색어. 생략하면 대화형으로 검색어를 입력 받는다.
    query: Vec<String>,
}

fn main() -> ExitCode {
    configs::load_dotenv();
    let _guard = match configs::set_global_logging_config() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let args = Argument::parse();

    let config = match configs::load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Cannot loading config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let searcher = match book_search::create_google_books_searcher(&config) {
        Ok(searcher) => searcher,
        Err(err) => {
            error!("Cannot create search client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut store = VolumeStore::new();
    if args.query.is_empty() {
        run_interactive(&searcher, &mut store)
    } else {
        run_once(&searcher, &mut store, &args.query.join(" "))
    }
}

fn run_once<C: Client>(searcher: &Searcher<C>, store: &mut VolumeStore, query: &str) -> ExitCode {
    if query.is_empty() {
        eprintln!("검색어를 입력해 주세요.");
        return ExitCode::FAILURE;
    }

    search_and_render(searcher, store, query)
}

/// 입력이 끝날 때까지 검색을 반복한다. 저장소는 세션 동안 유지된다.
fn run_interactive<C: Client>(searcher: &Searcher<C>, store: &mut VolumeStore) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("검색어> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                error!("Cannot read input: {}", err);
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };

        // 빈 입력만 건너뛰고 그 외의 입력은 그대로 검색어로 사용한다.
        if line.is_empty() {
            continue;
        }

        let _ = search_and_render(searcher, store, &line);
    }
}

/// 검색에 성공하면 결과를 stdout에 출력하고, 실패하면 에러를 stderr에 출력한다.
fn search_and_render<C: Client>(searcher: &Searcher<C>, store: &mut VolumeStore, query: &str) -> ExitCode {
    let request = match Request::builder().query(query).build() {
        Ok(request) => request,
        Err(err) => {
            error!("Invalid request: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match searcher.search(store, &request) {
        Ok(list) => {
            print!("{}", render::render(list));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
