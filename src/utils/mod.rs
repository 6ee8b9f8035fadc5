pub mod flexible;
pub mod time;
