pub mod handlers;
pub mod responder;
