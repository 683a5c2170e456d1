mod crud;
mod search;
mod validation;

pub use crud::{EntityService, DEFAULT_PAGE};
pub use search::PoolSearch;
pub use validation::RequestValidator;
