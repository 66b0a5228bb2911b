pub mod payload;

pub use payload::JsonPayload;
