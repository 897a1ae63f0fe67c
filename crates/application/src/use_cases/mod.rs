//! Application use cases (business logic orchestration).

mod interpolate_queries;
mod resolve_query_file;

pub use interpolate_queries::InterpolateQueries;
pub use resolve_query_file::{ResolveQueryFile, ResolveQueryFileInput, ResolveQueryFileOutput};
