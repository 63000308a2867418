mod actions;
mod editor;
mod management;
mod markdown_help;
mod metadata;
mod preview;
mod section_editor;
mod template_selector;
mod template_thumbnail;

pub use actions::*;
pub use editor::*;
pub use management::*;
pub use markdown_help::*;
pub use metadata::*;
pub use preview::*;
pub use section_editor::*;
pub use template_selector::*;
pub use template_thumbnail::*;
