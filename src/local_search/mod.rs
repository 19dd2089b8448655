//! Best-improvement local search.
//!
//! - [`two_opt_improve`]: 2-exchange on a closed tour
//! - [`schedule_two_opt_improve`]: 2-exchange on each machine's job sequence

mod schedule_two_opt;
mod two_opt;

pub use schedule_two_opt::{
    best_schedule_move, schedule_two_opt_improve, schedule_two_opt_improve_with_observer,
    ScheduleMove,
};
pub use two_opt::{
    best_two_opt_move, two_opt_gain, two_opt_improve, two_opt_improve_with_observer, TwoOptMove,
    GAIN_TOLERANCE,
};
