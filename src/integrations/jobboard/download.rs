// src/integrations/jobboard/download.rs
//
// Filename extraction from Content-Disposition.

use regex::Regex;
use std::sync::OnceLock;

fn extended_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)filename\*\s*=\s*(?:[\w-]+)?'[^']*'([^;]+)")
            .expect("static pattern is valid")
    })
}

fn plain_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)filename\s*=\s*(?:"([^"]*)"|([^;]+))"#)
            .expect("static pattern is valid")
    })
}

/// Filename hint from a `Content-Disposition` header value.
///
/// `filename*=UTF-8''...` wins over `filename=`. Percent escapes in the
/// extended form are decoded; path components are stripped.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let raw = extended_pattern()
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| percent_decode(m.as_str().trim()))
        .or_else(|| {
            plain_pattern()
                .captures(header)
                .and_then(|c| c.get(1).or_else(|| c.get(2)))
                .map(|m| m.as_str().trim().to_string())
        })?;

    let name = raw
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn percent_decode(input: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="resume_jane.pdf""#),
            Some("resume_jane.pdf".to_string())
        );
    }

    #[test]
    fn test_unquoted_filename() {
        assert_eq!(
            filename_from_disposition("attachment; filename=letter.docx; size=10"),
            Some("letter.docx".to_string())
        );
    }

    #[test]
    fn test_extended_filename_preferred() {
        let header = r#"attachment; filename="fallback.pdf"; filename*=UTF-8''r%C3%A9sum%C3%A9.pdf"#;
        assert_eq!(filename_from_disposition(header), Some("résumé.pdf".to_string()));
    }

    #[test]
    fn test_extended_filename_escapes() {
        let header = "attachment; filename*=UTF-8''100%25%20done%2Fcv.pdf";
        assert_eq!(filename_from_disposition(header), Some("cv.pdf".to_string()));

        let header = "attachment; filename*=UTF-8''offer%20letter%zz.pdf";
        assert_eq!(
            filename_from_disposition(header),
            Some("offer letter%zz.pdf".to_string())
        );
    }

    #[test]
    fn test_path_components_stripped() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="../../etc/cv.pdf""#),
            Some("cv.pdf".to_string())
        );
    }

    #[test]
    fn test_missing_filename() {
        assert_eq!(filename_from_disposition("inline"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    }
}
