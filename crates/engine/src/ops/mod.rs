mod round_up;

pub use round_up::RoundUpOutcome;
