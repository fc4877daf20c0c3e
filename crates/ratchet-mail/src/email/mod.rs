/// Email composition modules
pub mod composer;
pub mod mime;
pub mod template;

pub use composer::assemble_raw_message;
pub use template::TemplateRenderer;
