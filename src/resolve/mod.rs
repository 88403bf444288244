pub mod pipeline;
pub mod ports;
pub mod types;

pub use pipeline::NameResolutionPipeline;
pub use ports::{LabelRendererPort, TextExtractorPort};
pub use types::{LabelImage, ResolveConfig, ResolvedName};
