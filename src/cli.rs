//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.
//! 인자 없이 실행하면 현재 폴더의 고정된 세 파일을 변환합니다.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::matcher::BoxIdMatcher;

/// JSON 문자열 이스케이프 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// 역슬래시, 큰따옴표, 개행, 복귀, 탭만 이스케이프
    #[default]
    Minimal,
    /// 표준 JSON 이스케이프 (serde_json)
    Full,
}

impl std::fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscapeMode::Minimal => write!(f, "Minimal"),
            EscapeMode::Full => write!(f, "Full"),
        }
    }
}

/// tsvjson CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "tsvjson",
    author = "YourName <your@email.com>",
    version,
    about = "TSV TO JSON CONVERTER - 탭 구분 파일을 JSON 배열 파일로 변환하는 CLI 도구",
    long_about = r#"
TSV TO JSON CONVERTER
=====================

file_categories.csv, file_details.csv, file_technologies.csv
(탭 구분, 첫 줄 = 헤더)를 같은 이름의 .json 파일로 변환합니다.

특징:
  • 헤더 순서를 유지하는 JSON 객체 배열 출력
  • BOX ID 컬럼 값의 작은따옴표 제거
  • 한 파일이 실패해도 나머지 파일은 계속 변환

예제:
  tsvjson
  tsvjson -i ./export -o ./public/data
  tsvjson --escape full --verbose
"#
)]
pub struct Args {
    /// 입력 파일들이 있는 폴더
    #[arg(short, long, default_value = ".")]
    pub input_dir: PathBuf,

    /// JSON 파일을 저장할 폴더
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON 문자열 이스케이프 모드
    #[arg(long, value_enum, default_value_t = EscapeMode::Minimal)]
    pub escape: EscapeMode,

    /// 작은따옴표를 제거할 추가 컬럼 이름 (정확히 일치, 반복 가능)
    #[arg(long = "strip-column", value_name = "NAME")]
    pub strip_columns: Vec<String>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            escape: EscapeMode::Minimal,
            strip_columns: Vec::new(),
            verbose: false,
        }
    }
}

impl Args {
    /// 기본 트리거에 추가 컬럼을 더한 매처 생성
    pub fn matcher(&self) -> BoxIdMatcher {
        self.strip_columns
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .fold(BoxIdMatcher::default(), |m, name| m.with_exact(name))
    }
}
