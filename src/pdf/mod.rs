pub mod liner;
pub mod extractor;

pub use liner::{Liner, FORM_FEED};
pub use extractor::{PageExtractor, TextPageExtractor};
