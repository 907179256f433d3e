pub mod replay;
mod tailback_app;

pub use tailback_app::{TailbackApp, TailbackOperation};
