//! 일괄 변환 통계
//!
//! 세 파일의 변환 결과를 모아 마지막에 한 번 요약합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::converter::ConvertReport;

/// 변환 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 시도한 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub success_count: usize,
    /// 읽기 실패 수
    pub read_failed: usize,
    /// 쓰기 실패 수
    pub write_failed: usize,
    /// 출력된 총 레코드 수
    pub total_records: usize,
    pub total_bytes_read: u64,
    pub total_bytes_written: u64,
    start_time: Option<Instant>,
}

impl Statistics {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 성공한 변환 결과 반영
    pub fn record_success(&mut self, report: &ConvertReport) {
        self.success_count += 1;
        self.total_records += report.records;
        self.total_bytes_read += report.bytes_read;
        self.total_bytes_written += report.bytes_written;
    }

    pub fn increment_read_failed(&mut self) {
        self.read_failed += 1;
    }

    pub fn increment_write_failed(&mut self) {
        self.write_failed += 1;
    }

    /// 읽기 + 쓰기 실패
    pub fn error_count(&self) -> usize {
        self.read_failed + self.write_failed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 파일별 결과를 모은 요약 블록을 표준 출력에 출력
    pub fn print_summary(&self) {
        let rule = "─".repeat(50).bright_blue();
        let errors = self.error_count();
        let failed = if errors > 0 {
            format!(
                "{} (읽기 {} / 쓰기 {})",
                errors.to_string().red(),
                self.read_failed,
                self.write_failed
            )
        } else {
            "0".green().to_string()
        };

        println!("\n{}", rule);
        println!("{}", " 📊 변환 결과".bright_white().bold());
        println!("{}", rule);
        println!(
            "  변환 {}/{}  ·  실패 {}",
            self.success_count.to_string().green(),
            self.total_files,
            failed
        );
        println!("  레코드 {}", self.total_records);
        println!(
            "  읽음 {}  →  씀 {}",
            format_bytes(self.total_bytes_read),
            format_bytes(self.total_bytes_written)
        );
        println!("  소요 {}", format_duration(self.elapsed()));
        println!("{}", rule);
    }
}

/// 바이트 수를 1024 단위 접두어로 표시 (1 KB 미만은 정수)
///
/// # Examples
/// ```
/// use tsvjson::stats::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// 소요 시간 표시: 1초 미만은 ms, 1분 미만은 소수 셋째 자리 초
pub fn format_duration(duration: Duration) -> String {
    match duration.as_secs() {
        0 => format!("{}ms", duration.subsec_millis()),
        s if s < 60 => format!("{:.3}초", duration.as_secs_f64()),
        s => format!("{}분 {}초", s / 60, s % 60),
    }
}
