//! tsvjson - TSV TO JSON CONVERTER
//!
//! 탭 구분 텍스트 파일을 JSON 객체 배열 파일로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📋 **헤더 매핑**: 첫 줄의 컬럼 이름을 필드 이름으로 사용, 순서 유지
//! - ✂️ **BOX ID 정리**: BOX ID 컬럼 값의 작은따옴표 제거
//! - 🔤 **텍스트 유지**: 모든 값은 문자열 그대로 출력 (타입 추론 없음)
//! - 🛡️ **실패 격리**: 한 파일이 실패해도 나머지 파일은 계속 변환
//! - 📈 **통계**: 성공/실패 파일 수, 레코드 수, 입출력 용량 표시
//!
//! # 예제
//!
//! ```bash
//! # 현재 폴더의 file_categories.csv, file_details.csv, file_technologies.csv 변환
//! tsvjson
//!
//! # 입력/출력 폴더 지정
//! tsvjson -i ./export -o ./public/data
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod json;
pub mod matcher;
pub mod stats;
pub mod table;

// Re-exports for convenient access
pub use cli::{Args, EscapeMode};
pub use converter::{convert, default_jobs, ConvertOptions, ConvertReport, FileJob};
pub use error::{ConvertError, Result};
pub use matcher::BoxIdMatcher;
pub use stats::{format_bytes, Statistics};
pub use table::{Document, Header, Record};
