pub mod comparison;
pub mod firecrawl;
pub mod raw_fetch;

pub use comparison::*;
pub use firecrawl::*;
pub use raw_fetch::*;
