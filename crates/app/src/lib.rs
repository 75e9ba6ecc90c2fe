#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;

mod coach;
mod generator;
mod settings;

pub use coach::*;
pub use generator::*;
pub use settings::*;
