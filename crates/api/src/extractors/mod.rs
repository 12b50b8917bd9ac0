//! Request extractors that reject with `AppError`.

mod json;
mod path;

pub use json::AppJson;
pub use path::AppPath;
