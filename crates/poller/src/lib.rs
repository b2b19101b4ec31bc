pub mod client;
pub mod poller;
pub mod translator;
pub mod validator;
