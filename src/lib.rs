//! Exam timetabling library.
//!
//! Assigns courses to a bounded number of timeslots and rooms so that no
//! two courses sharing a student are examined simultaneously and every
//! course gets a room with enough seats.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `Timeslot`,
//!   `Schedule`, `Placement`
//! - **`conflicts`**: Student-conflict graph built once over the course list
//! - **`solver`**: Depth-first backtracking search over (course, timeslot)
//!   pairs with first-fit room placement
//! - **`loader`**: Whitespace-token course/room file formats
//! - **`validation`**: Structural input checks (name uniqueness, room order)
//!
//! # Pipeline
//!
//! Load (or construct) courses and rooms, validate, then hand both to
//! [`solver::BacktrackingScheduler`] with a timeslot budget. The solver
//! builds the conflict graph itself, orders courses largest-first, and
//! returns a [`models::Schedule`] only when every course is placed.

pub mod conflicts;
pub mod loader;
pub mod models;
pub mod solver;
pub mod validation;
