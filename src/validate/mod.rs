pub mod bet;
pub mod event;

pub use bet::validate_bet;
pub use event::validate_event;
