pub mod gateway;
pub mod payload;
pub mod worker;

pub use gateway::{CONTACT_ENDPOINT, ContactGateway, HttpGateway, SubmitError};
pub use payload::ContactPayload;
pub use worker::SubmitWorker;
