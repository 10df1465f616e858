//! BOX ID 컬럼 매칭 모듈
//!
//! 헤더 이름으로 작은따옴표를 제거할 컬럼을 판별합니다.

/// 부분 문자열 트리거 (대소문자 구분)
pub const BOX_ID_SUBSTRING: &str = "BOX ID";

/// 정확히 일치해야 하는 트리거 ("파일 BOX ID")
pub const FILE_BOX_ID_LABEL: &str = "ファイル BOX ID";

/// 작은따옴표 제거 대상 컬럼 판별기
#[derive(Debug, Clone)]
pub struct BoxIdMatcher {
    substrings: Vec<String>,
    exact: Vec<String>,
}

impl Default for BoxIdMatcher {
    fn default() -> Self {
        Self {
            substrings: vec![BOX_ID_SUBSTRING.to_string()],
            exact: vec![FILE_BOX_ID_LABEL.to_string()],
        }
    }
}

impl BoxIdMatcher {
    /// 트리거가 하나도 없는 매처 생성
    pub fn empty() -> Self {
        Self {
            substrings: Vec::new(),
            exact: Vec::new(),
        }
    }

    /// 정확히 일치하는 헤더 이름 트리거 추가
    ///
    /// # Examples
    /// ```
    /// use tsvjson::matcher::BoxIdMatcher;
    ///
    /// let matcher = BoxIdMatcher::default().with_exact("管理番号");
    /// assert!(matcher.matches("管理番号"));
    /// assert!(matcher.matches("旧 BOX ID"));
    /// assert!(!matcher.matches("Name"));
    /// ```
    pub fn with_exact(mut self, name: impl Into<String>) -> Self {
        self.exact.push(name.into());
        self
    }

    /// 부분 문자열 트리거 추가
    pub fn with_substring(mut self, needle: impl Into<String>) -> Self {
        self.substrings.push(needle.into());
        self
    }

    /// 헤더 이름이 트리거 조건에 해당하는지 확인
    pub fn matches(&self, header: &str) -> bool {
        self.substrings.iter().any(|s| header.contains(s.as_str()))
            || self.exact.iter().any(|e| header == e)
    }

    /// 헤더가 트리거에 해당하면 값에서 작은따옴표를 모두 제거
    pub fn clean(&self, header: &str, value: &str) -> String {
        if self.matches(header) {
            strip_quotes(value)
        } else {
            value.to_string()
        }
    }
}

/// 모든 작은따옴표(`'`)를 삭제
pub fn strip_quotes(value: &str) -> String {
    value.replace('\'', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_substring_trigger() {
        let matcher = BoxIdMatcher::default();
        assert!(matcher.matches("BOX ID"));
        assert!(matcher.matches("親フォルダ BOX ID"));
        assert!(matcher.matches("BOX ID (旧)"));
    }

    #[test]
    fn test_default_is_case_sensitive() {
        let matcher = BoxIdMatcher::default();
        assert!(!matcher.matches("box id"));
        assert!(!matcher.matches("Box Id"));
        assert!(!matcher.matches("BOXID"));
    }

    #[test]
    fn test_default_exact_label() {
        let matcher = BoxIdMatcher::default();
        assert!(matcher.matches(FILE_BOX_ID_LABEL));
        assert!(!matcher.matches("ファイル名"));
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = BoxIdMatcher::empty();
        assert!(!matcher.matches("BOX ID"));
        assert!(!matcher.matches(FILE_BOX_ID_LABEL));
    }

    #[test]
    fn test_with_exact_requires_full_match() {
        let matcher = BoxIdMatcher::empty().with_exact("ID");
        assert!(matcher.matches("ID"));
        assert!(!matcher.matches("ID2"));
    }

    #[test]
    fn test_with_substring() {
        let matcher = BoxIdMatcher::empty().with_substring("コード");
        assert!(matcher.matches("部署コード"));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'12345'"), "12345");
        assert_eq!(strip_quotes("a'b''c"), "abc");
        assert_eq!(strip_quotes("\"x\""), "\"x\"");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_clean_only_matching_columns() {
        let matcher = BoxIdMatcher::default();
        assert_eq!(matcher.clean("BOX ID", "'987'"), "987");
        assert_eq!(matcher.clean("Name", "'987'"), "'987'");
    }
}
