mod relay;
mod server;

pub use relay::*;
pub use server::*;
