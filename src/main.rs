//! tsvjson - TSV TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tsvjson::{
    cli::Args,
    converter::{convert_job, default_jobs, ConvertOptions, ConvertReport, FileJob},
    error::ConvertError,
    stats::{format_bytes, Statistics},
};

fn main() -> Result<()> {
    let args = Args::parse();

    print_header(&args);

    let options = ConvertOptions::new()
        .with_matcher(args.matcher())
        .with_escape(args.escape);
    let jobs = default_jobs(&args.input_dir, &args.output_dir);

    let stats = run_jobs(&args, &jobs, &options);
    stats.print_summary();

    // 개별 파일 실패는 종료 코드에 반영하지 않음
    println!(
        "\n{} CSV에서 JSON으로의 변환이 완료되었습니다.\n",
        "✅".bright_green()
    );

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 TSV TO JSON CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), args.input_dir);
    println!("  {} 출력 폴더: {:?}", "📄".bright_green(), args.output_dir);
    println!("  {} 이스케이프: {}", "⚙️".bright_yellow(), args.escape);

    if !args.strip_columns.is_empty() {
        println!(
            "  {} 추가 BOX ID 컬럼: {}",
            "✂️".bright_magenta(),
            args.strip_columns.join(", ")
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 작업을 순서대로 변환하고 통계 반환
fn run_jobs(args: &Args, jobs: &[FileJob], options: &ConvertOptions) -> Statistics {
    let mut stats = Statistics::new(jobs.len());

    for job in jobs {
        match convert_job(job, options) {
            Ok(report) => {
                stats.record_success(&report);
                print_success(&report, args.verbose);
            }
            Err(error) => {
                match error {
                    ConvertError::ReadFailure { .. } => stats.increment_read_failed(),
                    ConvertError::WriteFailure { .. } => stats.increment_write_failed(),
                }
                print_failure(&error, args.verbose);
            }
        }
    }

    stats
}

/// 변환 완료 메시지 출력
fn print_success(report: &ConvertReport, verbose: bool) {
    println!(
        "  {} {} 에 변환 완료",
        "✓".green(),
        report.output.display()
    );

    if verbose {
        println!(
            "    {}",
            format!(
                "컬럼 {} · 레코드 {} · {} → {}",
                report.columns,
                report.records,
                format_bytes(report.bytes_read),
                format_bytes(report.bytes_written)
            )
            .dimmed()
        );
    }
}

/// 실패 메시지 출력
fn print_failure(error: &ConvertError, verbose: bool) {
    let label = match error {
        ConvertError::ReadFailure { .. } => "CSV 파일 읽기 오류",
        ConvertError::WriteFailure { .. } => "JSON 파일 쓰기 오류",
    };

    eprintln!(
        "  {} {}: {}",
        "✗".red(),
        label.bright_red(),
        error.path().display()
    );

    if verbose {
        eprintln!("    {}", error.to_string().dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_jobs_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file_details.csv"), "A\n1\n").unwrap();
        fs::write(temp_dir.path().join("file_technologies.csv"), "A\n").unwrap();

        let args = Args {
            input_dir: temp_dir.path().to_path_buf(),
            output_dir: temp_dir.path().to_path_buf(),
            ..Args::default()
        };
        let jobs = default_jobs(&args.input_dir, &args.output_dir);

        let stats = run_jobs(&args, &jobs, &ConvertOptions::new());

        assert_eq!(stats.success_count, 2);
        assert_eq!(stats.read_failed, 1);
        assert_eq!(stats.total_records, 1);
        assert!(!temp_dir.path().join("file_categories.json").exists());
    }

    #[test]
    fn test_run_jobs_counts_write_failures() {
        let temp_dir = TempDir::new().unwrap();
        for stem in ["file_categories", "file_details", "file_technologies"] {
            fs::write(temp_dir.path().join(format!("{}.csv", stem)), "A\n1\n").unwrap();
        }

        let args = Args {
            input_dir: temp_dir.path().to_path_buf(),
            output_dir: temp_dir.path().join("missing"),
            ..Args::default()
        };
        let jobs = default_jobs(&args.input_dir, &args.output_dir);

        let stats = run_jobs(&args, &jobs, &ConvertOptions::new());

        assert_eq!(stats.success_count, 0);
        assert_eq!(stats.write_failed, 3);
    }
}
