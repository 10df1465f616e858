//! 탭 구분 텍스트 파싱 모듈
//!
//! 첫 줄을 헤더로, 나머지 줄을 헤더 순서의 레코드로 변환합니다.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::matcher::BoxIdMatcher;

/// 필드 구분자
pub const FIELD_DELIMITER: char = '\t';

const BOM: char = '\u{feff}';

/// 헤더 행 (필드 이름과 순서)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// 헤더 한 줄을 탭으로 분리하여 생성
    pub fn parse(line: &str) -> Self {
        Self {
            names: split_fields(line).into_iter().map(str::to_string).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// 데이터 한 행: 헤더 순서를 유지하는 이름 → 값 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 추가
    ///
    /// 이미 있는 이름이면 위치는 그대로 두고 값만 교체합니다.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 헤더와 데이터 한 줄을 위치별로 짝지어 레코드 생성
    ///
    /// 값이 헤더보다 적으면 있는 위치까지만, 많으면 초과분은 버립니다.
    pub fn from_line(header: &Header, line: &str, matcher: &BoxIdMatcher) -> Self {
        let mut record = Record::new();
        for (name, value) in header.names().iter().zip(split_fields(line)) {
            record.insert(name.as_str(), matcher.clean(name, value));
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// 입력 파일 하나에서 만들어진 레코드 목록
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// 텍스트 전체를 파싱
    ///
    /// 빈 텍스트는 헤더가 없는 빈 문서가 됩니다.
    ///
    /// # Examples
    /// ```
    /// use tsvjson::matcher::BoxIdMatcher;
    /// use tsvjson::table::Document;
    ///
    /// let (header, doc) = Document::parse("A\tB\tC\n1\t2\n", &BoxIdMatcher::default());
    /// assert_eq!(header.len(), 3);
    /// assert_eq!(doc.len(), 1);
    /// assert_eq!(doc.records()[0].get("C"), None);
    /// ```
    pub fn parse(text: &str, matcher: &BoxIdMatcher) -> (Header, Document) {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let mut lines = split_lines(text);

        let header = match lines.next() {
            Some(line) => Header::parse(line),
            None => return (Header::default(), Document::default()),
        };

        let records = lines
            .map(|line| Record::from_line(&header, line, matcher))
            .collect();

        (header, Document { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

/// 한 줄을 탭으로 분리
///
/// 끝쪽의 빈 조각은 버립니다. 빈 줄은 빈 필드 하나(`[""]`)가 되고,
/// 탭만 있는 줄은 필드가 없습니다.
pub fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return vec![line];
    }

    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while matches!(fields.last(), Some(f) if f.is_empty()) {
        fields.pop();
    }
    fields
}

/// 텍스트를 줄 단위로 분리
///
/// `\n`, `\r\n`, 단독 `\r` 모두 줄 끝으로 처리합니다.
/// 마지막 줄 끝 뒤의 빈 나머지는 줄로 세지 않습니다.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut pos = 0;

    std::iter::from_fn(move || {
        while pos < bytes.len() {
            match bytes[pos] {
                b'\n' => {
                    let line = &text[start..pos];
                    pos += 1;
                    start = pos;
                    return Some(line);
                }
                b'\r' => {
                    let line = &text[start..pos];
                    pos += 1;
                    if bytes.get(pos) == Some(&b'\n') {
                        pos += 1;
                    }
                    start = pos;
                    return Some(line);
                }
                _ => pos += 1,
            }
        }

        if start < bytes.len() {
            let line = &text[start..];
            start = bytes.len();
            Some(line)
        } else {
            None
        }
    })
}
