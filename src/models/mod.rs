pub mod element;
pub mod document;
pub mod location;
pub mod screenplay_properties;
pub mod conf;
pub mod page;

pub use element::{Element, ElementKind};
pub use document::{Document, DocumentMetadata, TitleField, TitlePage};
pub use location::Location;
pub use screenplay_properties::ScreenplayProperties;
pub use conf::Conf;
pub use page::PdfPage;
