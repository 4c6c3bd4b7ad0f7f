//! 单行分类判定
//!
//! 这里的函数都不依赖解析状态(角色名判定只看上一个元素类型)，
//! 输入为一行文本，函数内部会先去除首尾空白。

use crate::models::{ElementKind, Location};
use crate::utils::fountain_constants::{
    CHARACTER_EXTENSION_REGEX, CHARACTER_REGEX, LOCATION_TIME_SPLIT_REGEX, NOTE_REGEX,
    PAGE_NUMBER_REGEX, PARENTHETICAL_REGEX, SCENE_HEADING_REGEX, TRANSITION_REGEX,
};
use crate::utils::{visible_len, FountainConstants};

/// 是否为场景标题
pub fn is_scene_heading(line: &str, strict: bool) -> bool {
    let line = line.trim();
    if !SCENE_HEADING_REGEX.is_match(line) {
        return false;
    }
    if strict {
        if visible_len(line) > FountainConstants::STRICT_SCENE_HEADING_MAX_LEN {
            return false;
        }
        if line.ends_with(&FountainConstants::SCENE_HEADING_BAD_ENDINGS[..]) {
            return false;
        }
    }
    true
}

/// 是否为转场
pub fn is_transition(line: &str, strict: bool) -> bool {
    let line = line.trim();
    if TRANSITION_REGEX.is_match(line) {
        return true;
    }
    if strict {
        return false;
    }
    // 关键字区分大小写，小写的 "fade out:" 是普通文本
    FountainConstants::TRANSITION_KEYWORDS
        .iter()
        .any(|kw| line == *kw || line.ends_with(kw))
}

/// 是否为角色名
///
/// 非严格模式下只要满足全大写格式就接受，不看上下文；
/// 严格模式额外限制长度、禁止连续两个角色名并排除常见的全大写短语。
pub fn is_character_name(line: &str, strict: bool, previous: Option<ElementKind>) -> bool {
    let line = line.trim();
    if !CHARACTER_REGEX.is_match(line) {
        return false;
    }
    if !line.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    if TRANSITION_REGEX.is_match(line) || SCENE_HEADING_REGEX.is_match(line) {
        return false;
    }
    let len = visible_len(line);
    if len < FountainConstants::CHARACTER_MIN_LEN {
        return false;
    }

    if strict {
        if len > FountainConstants::STRICT_CHARACTER_MAX_LEN {
            return false;
        }
        if previous == Some(ElementKind::Character) {
            return false;
        }
        let name = clean_character_name(line);
        let name = name.trim_end_matches(|c: char| c == '.' || c == ':');
        let denied = FountainConstants::CHARACTER_DENYLIST.iter().any(|kw| {
            name == *kw || name.starts_with(&format!("{} ", kw))
        });
        if denied {
            return false;
        }
    }
    true
}

/// 是否为括号注释，只在等待对白时才有意义
pub fn is_parenthetical(line: &str) -> bool {
    PARENTHETICAL_REGEX.is_match(line.trim())
}

/// 是否为页码行
pub fn is_page_number(line: &str) -> bool {
    PAGE_NUMBER_REGEX.is_match(line.trim())
}

/// 是否为 [[注解]]
pub fn is_note(line: &str) -> bool {
    NOTE_REGEX.is_match(line.trim())
}

// 去除角色名后的扩展部分
pub fn clean_character_name(line: &str) -> String {
    CHARACTER_EXTENSION_REGEX
        .replace(line.trim(), "")
        .trim()
        .to_string()
}

// 解析场景位置信息
pub fn parse_location(scene_heading: &str) -> Option<Location> {
    let caps = SCENE_HEADING_REGEX.captures(scene_heading.trim())?;
    let prefix = caps.get(1)?.as_str().to_uppercase();
    let rest = caps.get(2)?.as_str().trim();

    let (interior, exterior) = if prefix.contains('/') {
        (true, true)
    } else if prefix.starts_with("INT") {
        (true, false)
    } else if prefix.starts_with("EXT") {
        (false, true)
    } else {
        (false, false)
    };

    let (name, time) = match LOCATION_TIME_SPLIT_REGEX.captures(rest) {
        Some(split) => (
            split.get(1).map_or("", |m| m.as_str()),
            split.get(2).map_or("", |m| m.as_str()),
        ),
        None => (rest, ""),
    };

    // 标准化地点名称
    let name = normalize(name);
    let time = normalize(time);

    Some(Location::new(name, interior, exterior, time))
}

fn normalize(text: &str) -> String {
    text.trim()
        .trim_end_matches('.')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_heading_strict_rules() {
        assert!(is_scene_heading("INT. COFFEE SHOP - DAY", true));
        assert!(is_scene_heading("INT. COFFEE SHOP - DAY.", true));
        assert!(is_scene_heading("INT. COFFEE SHOP - DAY:", false));
        assert!(!is_scene_heading("INT. COFFEE SHOP - DAY:", true));
        assert!(!is_scene_heading("EXT. WHERE ARE WE?", true));

        let long = format!("INT. {}", "A".repeat(80));
        assert!(is_scene_heading(&long, false));
        assert!(!is_scene_heading(&long, true));
    }

    #[test]
    fn transition_keywords_only_outside_strict() {
        assert!(is_transition("CUT TO:", false));
        assert!(is_transition("CUT TO:", true));
        assert!(is_transition("FADE IN:", false));
        assert!(!is_transition("FADE IN:", true));
        assert!(!is_transition("fade out:", false));
        assert!(!is_transition("Say it to:", false));
        assert!(is_transition("  FADE OUT:  ", false));
        assert!(!is_transition("He fades out.", false));
    }

    #[test]
    fn character_name_rules() {
        assert!(is_character_name("JOHN", false, None));
        assert!(is_character_name("JOHN (V.O.)", false, Some(ElementKind::Action)));
        assert!(is_character_name("SARAH-JANE", false, Some(ElementKind::SceneHeading)));
        assert!(!is_character_name("J", false, None));
        assert!(!is_character_name("John", false, None));
        assert!(!is_character_name("CUT TO:", false, None));
        assert!(!is_character_name("INT. HOUSE", false, None));
        assert!(!is_character_name("123", false, None));
        assert!(!is_character_name("BOOM.", false, Some(ElementKind::SceneHeading)));
        assert!(!is_character_name("DR. JONES", false, None));
    }

    #[test]
    fn character_name_strict_rules() {
        assert!(is_character_name("JOHN", true, Some(ElementKind::Action)));
        assert!(!is_character_name("JOHN", true, Some(ElementKind::Character)));
        assert!(is_character_name("JOHN", false, Some(ElementKind::Character)));
        assert!(!is_character_name("THE END", true, None));
        assert!(is_character_name("THE END", false, None));
        assert!(!is_character_name("LATER", true, None));
        assert!(!is_character_name("BACK TO THE HOUSE", true, None));
        assert!(is_character_name("LATERAL", true, None));
        assert!(!is_character_name("FADE OUT.", true, None));
        let long = "A".repeat(41);
        assert!(is_character_name(&long, false, None));
        assert!(!is_character_name(&long, true, None));
    }

    #[test]
    fn parenthetical_needs_content() {
        assert!(is_parenthetical("(smiling)"));
        assert!(is_parenthetical("  (beat)  "));
        assert!(!is_parenthetical("()"));
        assert!(!is_parenthetical("( )"));
        assert!(!is_parenthetical("(a) and (b)"));
    }

    #[test]
    fn note_and_page_number() {
        assert!(is_note("[[check continuity]]"));
        assert!(!is_note("[check]"));
        assert!(is_page_number("42."));
        assert!(is_page_number("Page 7 of 90"));
        assert!(!is_page_number("42 MEN"));
    }

    #[test]
    fn clean_name_strips_extension() {
        assert_eq!(clean_character_name("JOHN (V.O.)"), "JOHN");
        assert_eq!(clean_character_name("MARY (CONT'D) ^"), "MARY");
        assert_eq!(clean_character_name("BOB"), "BOB");
    }

    #[test]
    fn location_is_parsed_from_heading() {
        let loc = parse_location("INT. COFFEE SHOP - DAY").unwrap();
        assert_eq!(loc.name, "COFFEE SHOP");
        assert_eq!(loc.time_of_day, "DAY");
        assert_eq!(loc.int_ext, "INT");

        let loc = parse_location("int./ext. car - moving - night").unwrap();
        assert_eq!(loc.name, "CAR - MOVING");
        assert_eq!(loc.time_of_day, "NIGHT");
        assert_eq!(loc.int_ext, "INT/EXT");

        let loc = parse_location("EXT. PARK").unwrap();
        assert_eq!(loc.name, "PARK");
        assert_eq!(loc.time_of_day, "");
        assert!(parse_location("He walks in.").is_none());
    }
}
