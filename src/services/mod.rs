pub mod chatbot;
pub mod ml_client;
