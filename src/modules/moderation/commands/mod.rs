pub mod ban;
pub mod clear;
pub mod kick;
pub mod timeout;
pub mod unban;

pub use ban::*;
pub use clear::*;
pub use kick::*;
pub use timeout::*;
pub use unban::*;
