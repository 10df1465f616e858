//! 파일 변환 모듈
//!
//! 탭 구분 입력 파일 하나를 읽어 JSON 출력 파일 하나를 씁니다.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::EscapeMode;
use crate::error::{ConvertError, Result};
use crate::json::write_document;
use crate::matcher::BoxIdMatcher;
use crate::table::Document;

/// 변환할 고정 파일 이름 (확장자 제외)
pub const DEFAULT_STEMS: [&str; 3] = ["file_categories", "file_details", "file_technologies"];

/// 입력 파일 확장자 (내용은 탭 구분)
pub const INPUT_EXTENSION: &str = "csv";

/// 출력 파일 확장자
pub const OUTPUT_EXTENSION: &str = "json";

/// 입력/출력 경로 한 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FileJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// 고정된 세 파일의 변환 작업 목록
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tsvjson::converter::default_jobs;
///
/// let jobs = default_jobs(Path::new("."), Path::new("out"));
/// assert_eq!(jobs.len(), 3);
/// assert_eq!(jobs[1].input, Path::new("./file_details.csv"));
/// assert_eq!(jobs[1].output, Path::new("out/file_details.json"));
/// ```
pub fn default_jobs(input_dir: &Path, output_dir: &Path) -> Vec<FileJob> {
    DEFAULT_STEMS
        .iter()
        .map(|stem| {
            FileJob::new(
                input_dir.join(format!("{}.{}", stem, INPUT_EXTENSION)),
                output_dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION)),
            )
        })
        .collect()
}

/// 변환 옵션
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// 작은따옴표 제거 대상 컬럼 매처
    pub matcher: BoxIdMatcher,
    /// JSON 이스케이프 모드
    pub escape: EscapeMode,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 매처 설정
    pub fn with_matcher(mut self, matcher: BoxIdMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// 이스케이프 모드 설정
    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }
}

/// 변환 성공 결과
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// 헤더 컬럼 수
    pub columns: usize,
    /// 출력된 레코드 수
    pub records: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

/// 입력 파일 하나를 JSON 파일로 변환
///
/// 읽기에 실패하면 출력 파일은 만들지 않습니다.
/// 쓰기 도중 실패하면 이미 기록된 내용은 남을 수 있습니다.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let text = fs::read_to_string(input).map_err(|e| ConvertError::ReadFailure {
        path: input.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (header, doc) = Document::parse(&text, &options.matcher);
    let bytes_written = write_output(output, &doc, options.escape)?;

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        columns: header.len(),
        records: doc.len(),
        bytes_read: text.len() as u64,
        bytes_written,
    })
}

/// 작업 단위 변환
pub fn convert_job(job: &FileJob, options: &ConvertOptions) -> Result<ConvertReport> {
    convert(&job.input, &job.output, options)
}

fn write_output(output: &Path, doc: &Document, escape: EscapeMode) -> Result<u64> {
    let write_failure = |e: std::io::Error| ConvertError::WriteFailure {
        path: output.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(output).map_err(write_failure)?;
    let mut writer = CountingWriter::new(BufWriter::new(file));
    write_document(doc, &mut writer, escape).map_err(write_failure)?;
    writer.flush().map_err(write_failure)?;

    Ok(writer.count)
}

/// 기록한 바이트 수를 세는 래퍼
struct CountingWriter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_jobs_paths() {
        let jobs = default_jobs(Path::new("in"), Path::new("out"));
        let inputs: Vec<_> = jobs.iter().map(|j| j.input.clone()).collect();
        assert_eq!(
            inputs,
            vec![
                PathBuf::from("in/file_categories.csv"),
                PathBuf::from("in/file_details.csv"),
                PathBuf::from("in/file_technologies.csv"),
            ]
        );
        assert_eq!(jobs[2].output, PathBuf::from("out/file_technologies.json"));
    }

    #[test]
    fn test_options_builder() {
        let options = ConvertOptions::new()
            .with_matcher(BoxIdMatcher::empty())
            .with_escape(EscapeMode::Full);

        assert_eq!(options.escape, EscapeMode::Full);
        assert!(!options.matcher.matches("BOX ID"));
    }

    #[test]
    fn test_report_counts_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.csv");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "A\tB\n1\t2\n").unwrap();

        let report = convert(&input, &output, &ConvertOptions::new()).unwrap();

        assert_eq!(report.columns, 2);
        assert_eq!(report.records, 1);
        assert_eq!(report.bytes_read, 8);
        assert_eq!(report.bytes_written, fs::metadata(&output).unwrap().len());
    }

    #[test]
    fn test_read_failure_creates_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.csv");
        let output = temp_dir.path().join("out.json");

        let err = convert(&input, &output, &ConvertOptions::new()).unwrap_err();

        assert!(matches!(err, ConvertError::ReadFailure { .. }));
        assert_eq!(err.path(), input.as_path());
        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("bad.csv");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, [0x41, 0x09, 0xff, 0xfe, 0x0a]).unwrap();

        let err = convert(&input, &output, &ConvertOptions::new()).unwrap_err();

        assert!(matches!(err, ConvertError::ReadFailure { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_write_failure_names_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.csv");
        let output = temp_dir.path().join("no_such_dir").join("out.json");
        fs::write(&input, "A\n1\n").unwrap();

        let err = convert(&input, &output, &ConvertOptions::new()).unwrap_err();

        assert!(matches!(err, ConvertError::WriteFailure { .. }));
        assert_eq!(err.path(), output.as_path());
    }
}
