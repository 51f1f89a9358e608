pub mod headless;
pub mod human;

pub use headless::{HeadlessConfig, HeadlessMode, HeadlessSummary};
pub use human::HumanMode;
