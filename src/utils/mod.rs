pub mod money;
pub mod secret;
