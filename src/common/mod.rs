pub mod response;

pub use response::{ExceptionInfo, ServiceResponse};
