pub mod fountain_constants;

use unicode_segmentation::UnicodeSegmentation;
pub use fountain_constants::FountainConstants;

/// 按字形簇计算文本长度
///
/// 严格模式的长度限制以用户可见字符为准，而不是字节数
pub fn visible_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// 去除行尾空白，保留行首缩进
pub fn trim_line_end(text: &str) -> &str {
    text.trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_len_counts_graphemes() {
        assert_eq!(visible_len("JOHN"), 4);
        assert_eq!(visible_len("JOSE\u{301}"), 4);
        assert_eq!(visible_len("顾清"), 2);
    }

    #[test]
    fn trim_line_end_keeps_indent() {
        assert_eq!(trim_line_end("    JOHN   \t"), "    JOHN");
    }
}
