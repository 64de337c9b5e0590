//! Application services layer - use cases over the account domain.

mod register_user;

pub use register_user::{AccountRegistration, RegisterUserCommand, RegisterUserUseCase};
