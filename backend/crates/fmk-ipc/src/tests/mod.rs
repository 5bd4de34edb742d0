mod message_validator;
mod response;
