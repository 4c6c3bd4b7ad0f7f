use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 标题页最多缓存的行数，超出后按 action 输出
    pub const TITLE_PAGE_MAX_LINES: usize = 15;

    /// 严格模式下场景标题的最大长度
    pub const STRICT_SCENE_HEADING_MAX_LEN: usize = 80;

    /// 严格模式下角色名的最大长度
    pub const STRICT_CHARACTER_MAX_LEN: usize = 40;

    pub const CHARACTER_MIN_LEN: usize = 2;

    // 常见转场关键字，非严格模式下按完全匹配或后缀匹配
    pub const TRANSITION_KEYWORDS: [&'static str; 10] = [
        "FADE IN:",
        "FADE OUT:",
        "FADE TO BLACK:",
        "FADE TO WHITE:",
        "CUT TO:",
        "DISSOLVE TO:",
        "MATCH CUT TO:",
        "SMASH CUT TO:",
        "JUMP CUT TO:",
        "TO:",
    ];

    // 严格模式下不能作为角色名的全大写短语
    pub const CHARACTER_DENYLIST: [&'static str; 7] = [
        "FADE IN",
        "FADE OUT",
        "THE END",
        "CONTINUED",
        "BACK TO",
        "LATER",
        "MEANWHILE",
    ];

    // 严格模式下场景标题不能以这些字符结尾，句号允许
    pub const SCENE_HEADING_BAD_ENDINGS: [char; 5] = [',', ';', ':', '!', '?'];
}

lazy_static! {
    // 场景标题前缀: INT. / EXT. / INT./EXT. / INT / EXT / I/E / EST
    // group 1 为前缀，group 2 为地点和时间
    pub static ref SCENE_HEADING_REGEX: Regex =
        Regex::new(r"(?i)^(int\.?\s*/\s*ext|i\.?\s*/\s*e|int|ext|est)\.?\s+(.*)$").unwrap();

    // 地点与时间之间的最后一个破折号
    pub static ref LOCATION_TIME_SPLIT_REGEX: Regex =
        Regex::new(r"^(.*)\s[-–—−]+\s*(.*)$").unwrap();

    // 通用转场: 全大写 + " TO:"
    pub static ref TRANSITION_REGEX: Regex =
        Regex::new(r"^[A-Z][A-Z\s]* TO:$").unwrap();

    // 角色名: 全大写字母、数字、空格、连字符、撇号，后跟可选的括号扩展
    // 句点只允许出现在括号扩展里，"BOOM." 这类拟声词按动作处理
    pub static ref CHARACTER_REGEX: Regex =
        Regex::new(r"^[\p{Lu}0-9][\p{Lu}0-9 '\-]*(?:\s*\([\p{L}0-9 '\-\.]+\))*$").unwrap();

    // 角色名后的扩展部分，例如 (V.O.)、(CONT'D)
    pub static ref CHARACTER_EXTENSION_REGEX: Regex =
        Regex::new(r"\s*(\(.*\)|（.*）)\s*(\^)?\s*$").unwrap();

    pub static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(r"^\([^()]*[^()\s][^()]*\)$").unwrap();

    // 页码: "42" / "42." / "Page 3" / "page 3 of 120" / "[12]" / "(12)"
    pub static ref PAGE_NUMBER_REGEX: Regex =
        Regex::new(r"(?i)^(?:\d+\.?|page\s+\d+(?:\s+of\s+\d+)?|\[\d+\]|\(\d+\))$").unwrap();

    pub static ref NOTE_REGEX: Regex =
        Regex::new(r"^\[\[.*\]\]$").unwrap();

    // 标题页 "Key: value"
    pub static ref TITLE_KEY_REGEX: Regex =
        Regex::new(r"(?i)^(title|credit|author|source|draft|date|contact)\s*:\s*(.*)$").unwrap();

    // 署名行，下一行为作者
    pub static ref TITLE_CREDIT_REGEX: Regex =
        Regex::new(r"(?i)^(?:(?:written|screenplay|story|teleplay)\s+)?by:?$").unwrap();

    // 改编来源
    pub static ref TITLE_SOURCE_REGEX: Regex =
        Regex::new(r"(?i)^based\s+(?:on|upon)\b").unwrap();

    pub static ref TITLE_DRAFT_REGEX: Regex =
        Regex::new(r"(?i)\bdraft\b").unwrap();

    pub static ref TITLE_DATE_REGEX: Regex = Regex::new(
        r"(?i)^(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(?:\d{1,2},?\s+)?\d{4}|\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+\d{4}|\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}|\d{4}-\d{2}-\d{2})$"
    ).unwrap();

    pub static ref TITLE_CONTACT_REGEX: Regex = Regex::new(
        r"[\w.+\-]+@[\w\-]+\.[\w.]+|\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4}"
    ).unwrap();
}
