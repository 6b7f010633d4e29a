use std::fmt;
use std::fmt::{Display, Formatter};
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[derive(Debug, Clone, PartialEq)]
pub enum LoggingError {
    InvalidLevel(String),
    InvalidRotation(String),
    InvalidKeep(String),
    FileAppenderFailed(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::InvalidLevel(s) =>
                write!(f, "로그 레벨(level)은 TRACE, DEBUG, INFO, WARN, ERROR만 가능 합니다. (입력: {})", s),
            LoggingError::InvalidRotation(s) =>
                write!(f, "로깅 파일 로테이션(rotation)은 DAILY, HOURLY, MINUTELY, NEVER만 가능 합니다. (입력: {})", s),
            LoggingError::InvalidKeep(s) => write!(f, "로그 파일 개수(keep)는 숫자여야 합니다. (입력: {})", s),
            LoggingError::FileAppenderFailed(s) => write!(f, "로그 파일을 생성할 수 없습니다: {}", s),
        }
    }
}

impl std::error::Error for LoggingError {}

#[derive(Debug, Clone)]
pub struct Config {
    /// 출력할 로그의 레벨로 지정된 로그 레벨 이상만 로깅된다.
    /// 설정하지 않을시 기본값은 INFO로 설정 된다.
    ///
    /// 이 값은 [`tracing::Level`]로 변환 됨으로 자세한 사항은 해당 파일을 확인
    pub level: Option<String>,

    /// 설정 되지 않으면 파일에는 로그를 남기지 않고 stderr로만 출력한다.
    pub file: Option<FileConfig>,
}

#[derive(Debug, Clone)]
pub struct FileConfig {
    pub dir: String,
    pub name: String,

    /// 최대 로그 파일 개수로 로그 파일이 설정한 개수보다 커질 경우 기존의 로그파일들은 삭제 된다.
    /// 설정 되지 않을 시 로그 파일은 삭제 되지 않는다.
    pub keep: Option<usize>,

    /// 로깅 파일이 분리 되는 기간으로 .log 파일 하나 당 설정된 기간 동안 로그가 기록 된다.
    /// 설정 되지 않을시 기본값은 DAILY로 설정된다.
    pub rotation: Option<String>,
}

/// 전역 로거를 설정한다. 검색 결과 출력(stdout)과 섞이지 않도록 콘솔 로그는 stderr로 보낸다.
pub fn set_global_logging_config(c: &Config) -> Result<Option<WorkerGuard>, LoggingError> {
    let level = c.level.as_deref()
        .map(parse_level)
        .transpose()?
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_timer(LocalTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]")))
        .with_max_level(level);

    match &c.file {
        Some(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(build_file_appender(file)?);
            subscriber.with_writer(std::io::stderr.and(non_blocking)).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn build_file_appender(c: &FileConfig) -> Result<rolling::RollingFileAppender, LoggingError> {
    let rotation = c.rotation.as_deref()
        .map(parse_rotation)
        .transpose()?
        .unwrap_or(rolling::Rotation::DAILY);

    let mut file_appender = rolling::RollingFileAppender::builder()
        .filename_prefix(c.name.clone())
        .filename_suffix("log")
        .rotation(rotation);

    if let Some(keep) = c.keep {
        file_appender = file_appender.max_log_files(keep);
    }

    file_appender.build(c.dir.clone())
        .map_err(|e| LoggingError::FileAppenderFailed(e.to_string()))
}

fn parse_rotation(s: &str) -> Result<rolling::Rotation, LoggingError> {
    match s {
        "DAILY" => Ok(rolling::Rotation::DAILY),
        "HOURLY" => Ok(rolling::Rotation::HOURLY),
        "MINUTELY" => Ok(rolling::Rotation::MINUTELY),
        "NEVER" => Ok(rolling::Rotation::NEVER),
        _ => Err(LoggingError::InvalidRotation(s.to_owned())),
    }
}

fn parse_level(l: &str) -> Result<tracing::Level, LoggingError> {
    match l {
        "TRACE" => Ok(tracing::Level::TRACE),
        "DEBUG" => Ok(tracing::Level::DEBUG),
        "INFO" => Ok(tracing::Level::INFO),
        "WARN" => Ok(tracing::Level::WARN),
        "ERROR" => Ok(tracing::Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(l.to_owned())),
    }
}
