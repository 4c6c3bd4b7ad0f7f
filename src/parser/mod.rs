pub mod line_classifier;
pub mod title_page;
pub mod screenplay_parser;

pub use screenplay_parser::{
    ScreenplayParser,
    ParseOutput,
    ParserState,
    SourceLine,
    StepMode,
    source_lines,
    step
};
pub use title_page::{TitlePageBuffer, parse_title_page};
