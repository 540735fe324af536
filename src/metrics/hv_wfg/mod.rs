pub use dominance::{dominance, improving_order, Dominance};
pub use sort::sort_improving;
pub use strategy::{Strategy, StrategyConfig};
pub use wfg::Wfg;

mod dominance;
mod front_set;
mod sort;
mod strategy;
mod wfg;
