pub mod error;
pub mod greeting;

pub use error::GreetingError;
pub use greeting::{GreetingRequest, GreetingResponse};
