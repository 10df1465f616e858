//! 에러 타입 정의 모듈
//!
//! 변환 중 발생할 수 있는 두 가지 실패(읽기/쓰기)를 정의합니다.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 파일 변환 중 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 입력 파일이 없거나 읽을 수 없거나 UTF-8이 아님
    #[error("입력 파일 읽기 실패 ({path}): {reason}")]
    ReadFailure { path: PathBuf, reason: String },

    /// 출력 파일을 만들 수 없거나 쓸 수 없음
    #[error("출력 파일 쓰기 실패 ({path}): {reason}")]
    WriteFailure { path: PathBuf, reason: String },
}

impl ConvertError {
    /// 에러와 관련된 파일 경로
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::ReadFailure { path, .. } | ConvertError::WriteFailure { path, .. } => {
                path
            }
        }
    }
}

/// tsvjson 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
