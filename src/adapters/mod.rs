mod project_filesystem;
mod template;

pub use project_filesystem::FilesystemProjectStore;
pub use template::JsConfigRenderer;
