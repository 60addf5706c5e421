mod config;
mod pagination;
mod renderer;
mod search_path;
mod sidebars;
mod slug;
mod theme;

pub use self::config::*;
pub use self::pagination::*;
pub use self::renderer::*;
pub use self::search_path::*;
pub use self::sidebars::*;
pub use self::slug::*;
pub use self::theme::*;

pub use liquid_core::model::KString;
pub use relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
