//! RecordService: record operations over an injected store, plus payload validation.

mod records;
mod validation;
pub use records::RecordService;
pub use validation::RequestValidator;
