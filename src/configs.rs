use crate::provider::api::google_books::GOOGLE_BOOKS_ENDPOINT;
use serde::Deserialize;
use std::env;
use tracing_appender::non_blocking::WorkerGuard;

pub mod logging;

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// 도서 검색 API 엔드포인트
    endpoint: String,
}

impl AppConfig {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// 애플리케이션 설정을 로드한다.
///
/// `config/{RUN_MODE}` 파일(없어도 됨)과 `BOOK_SEARCH_` 접두사가 붙은 환경 변수를 순서대로 읽으며
/// 아무 설정도 없으면 Google Books 엔드포인트를 사용한다.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    config::Config::builder()
        .set_default("endpoint", GOOGLE_BOOKS_ENDPOINT)?
        .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
        .add_source(config::Environment::with_prefix("BOOK_SEARCH"))
        .build()?
        .try_deserialize()
}

/// 프로그램에서 사용할 로깅 옵션을 설정한다.
///
/// `LOGGER_DIR`가 설정되어 있으면 파일에도 로그를 남기며, 반환된 [`WorkerGuard`]는 프로그램 종료 시까지 유지해야 한다.
pub fn set_global_logging_config() -> Result<Option<WorkerGuard>, logging::LoggingError> {
    let level = env::var("LOGGER_LEVEL").ok();

    let file = match env::var("LOGGER_DIR") {
        Ok(dir) => {
            let name = env::var("LOGGER_FILE_NAME").unwrap_or_else(|_| "book-search".into());
            let keep = env::var("LOGGER_KEEP")
                .ok()
                .map(|v| v.parse::<usize>()
                    .map_err(|_| logging::LoggingError::InvalidKeep(v)))
                .transpose()?;
            let rotation = env::var("LOGGER_ROTATION").ok();

            Some(logging::FileConfig { dir, name, keep, rotation })
        }
        Err(_) => None,
    };

    logging::set_global_logging_config(&logging::Config { level, file })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_google_books() {
        let config: AppConfig = config::Config::builder()
            .set_default("endpoint", GOOGLE_BOOKS_ENDPOINT)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!("https://www.googleapis.com/books/v1/volumes", config.endpoint());
    }

    #[test]
    fn endpoint_can_be_overridden() {
        let config: AppConfig = config::Config::builder()
            .set_default("endpoint", GOOGLE_BOOKS_ENDPOINT)
            .unwrap()
            .set_override("endpoint", "http://localhost:8080/volumes")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!("http://localhost:8080/volumes", config.endpoint());
    }
}
