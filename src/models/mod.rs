pub mod classified_event;
pub mod daily_session;
pub mod direction;
pub mod raw_event;
pub mod weekly_summary;
