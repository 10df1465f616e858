//! JSON 출력 모듈
//!
//! 레코드 목록을 들여쓰기된 JSON 배열로 씁니다.

use std::io::{self, Write};

use crate::cli::EscapeMode;
use crate::table::{Document, Record};

/// 문자열을 JSON 문자열 리터럴 안에 넣을 수 있도록 이스케이프
///
/// 역슬래시, 큰따옴표, `\n`, `\r`, `\t` 다섯 가지만 변환하며
/// 그 외 제어 문자는 그대로 둡니다.
///
/// # Examples
/// ```
/// use tsvjson::json::escape_json_string;
///
/// assert_eq!(escape_json_string(r#"a\"b"#), r#"a\\\"b"#);
/// assert_eq!(escape_json_string("x\ty"), "x\\ty");
/// ```
pub fn escape_json_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 문서를 지정한 이스케이프 모드로 출력
pub fn write_document<W: Write>(doc: &Document, writer: W, mode: EscapeMode) -> io::Result<()> {
    match mode {
        EscapeMode::Minimal => write_minimal(doc, writer),
        EscapeMode::Full => write_full(doc, writer),
    }
}

/// 문서를 문자열로 렌더링
pub fn render_document(doc: &Document, mode: EscapeMode) -> io::Result<String> {
    let mut buf = Vec::new();
    write_document(doc, &mut buf, mode)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_minimal<W: Write>(doc: &Document, mut writer: W) -> io::Result<()> {
    writeln!(writer, "[")?;

    let records = doc.records();
    for (i, record) in records.iter().enumerate() {
        write_record(&mut writer, record)?;
        if i + 1 < records.len() {
            writeln!(writer, ",")?;
        } else {
            writeln!(writer)?;
        }
    }

    writeln!(writer, "]")?;
    writer.flush()
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writeln!(writer, "  {{")?;

    let count = record.len();
    for (i, (name, value)) in record.iter().enumerate() {
        write!(
            writer,
            "    \"{}\": \"{}\"",
            escape_json_string(name),
            escape_json_string(value)
        )?;
        if i + 1 < count {
            writeln!(writer, ",")?;
        } else {
            writeln!(writer)?;
        }
    }

    write!(writer, "  }}")
}

fn write_full<W: Write>(doc: &Document, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writeln!(writer)?;
    writer.flush()
}
