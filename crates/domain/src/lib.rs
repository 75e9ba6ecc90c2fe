#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod achievement;
mod analytics;
mod calories;
mod demo;
mod exercise;
mod format;
mod muscles;
mod nutrition;
mod profile;
mod streak;
mod template;
mod workout;
mod workout_type;

pub use achievement::*;
pub use analytics::*;
pub use calories::*;
pub use demo::*;
pub use exercise::*;
pub use format::*;
pub use muscles::*;
pub use nutrition::*;
pub use profile::*;
pub use streak::*;
pub use template::*;
pub use workout::*;
pub use workout_type::*;
