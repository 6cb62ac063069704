mod addresses;
mod render;

pub use addresses::addresses;
pub use render::{cities, majority_loss, minority_win, report};
