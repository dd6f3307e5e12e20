pub mod attendance_status;
pub mod key_mode;
pub mod mark_outcome;
pub mod record;
pub mod roster;

pub use attendance_status::AttendanceStatus;
pub use key_mode::KeyMode;
pub use mark_outcome::MarkOutcome;
pub use record::AttendanceRecord;
pub use roster::RosterEntry;
