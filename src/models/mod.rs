//! Exam timetabling domain models.
//!
//! Core data types for representing a timetabling instance and its
//! solution:
//!
//! | Type | Role |
//! |------|------|
//! | [`Course`] | Named exam with its enrolled students |
//! | [`Room`] | Seating resource with a fixed capacity |
//! | [`Timeslot`] | Mutable search-time period with per-room counters |
//! | [`Schedule`] | Final course → (timeslot, room) assignment |

mod course;
mod room;
mod schedule;
mod timeslot;

pub use course::Course;
pub use room::{sort_rooms_by_capacity, Room};
pub use schedule::{Placement, Schedule, SlotAssignments};
pub use timeslot::Timeslot;
