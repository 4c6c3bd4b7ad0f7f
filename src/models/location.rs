use serde::{Deserialize, Serialize};

/// 场景标题中解析出的位置信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub interior: bool,
    pub exterior: bool,
    pub time_of_day: String,
    /// 场景标题前缀的规范写法: INT / EXT / INT/EXT / EST
    pub int_ext: String,
}

impl Location {
    pub fn new(
        name: String,
        interior: bool,
        exterior: bool,
        time_of_day: String
    ) -> Self {
        let int_ext = match (interior, exterior) {
            (true, true) => "INT/EXT",
            (true, false) => "INT",
            (false, true) => "EXT",
            (false, false) => "EST",
        };
        Location {
            name,
            interior,
            exterior,
            time_of_day,
            int_ext: int_ext.to_string(),
        }
    }
}
