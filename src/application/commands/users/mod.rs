mod login;
mod password;
mod register;
mod seed;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use seed::{DEMO_ACCOUNTS, DemoAccount};
pub use service::UserCommandService;
