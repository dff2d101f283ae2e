//! Schedule (solution) model.
//!
//! A schedule is a complete, conflict-free assignment of every course to
//! a timeslot and room. It exists only for feasible instances: the solver
//! returns `None` rather than a partial schedule.

use serde::Serialize;
use std::fmt;

/// A course sitting in a room.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    /// Course name.
    pub course: String,
    /// Room name.
    pub room: String,
}

/// The placements of one timeslot.
///
/// A slot can be empty: the solver keeps every timeslot it materialized
/// during the search, including slots whose tentative occupants were all
/// backtracked out before the solution was found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotAssignments {
    /// (course, room) placements, ordered by room list position.
    pub placements: Vec<Placement>,
}

/// A complete exam schedule.
///
/// Timeslots appear in creation order; display numbering is 1-based.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule {
    /// One entry per materialized timeslot.
    pub timeslots: Vec<SlotAssignments>,
}

impl SlotAssignments {
    /// Whether this slot holds no course.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The room assigned to a course in this slot, if any.
    pub fn room_for(&self, course: &str) -> Option<&str> {
        self.placements
            .iter()
            .find(|p| p.course == course)
            .map(|p| p.room.as_str())
    }
}

impl Schedule {
    /// Number of timeslots (including empty ones).
    pub fn timeslot_count(&self) -> usize {
        self.timeslots.len()
    }

    /// Total number of placed courses.
    pub fn placement_count(&self) -> usize {
        self.timeslots.iter().map(|s| s.placements.len()).sum()
    }

    /// Finds the timeslot index and room for a course.
    pub fn find_course(&self, course: &str) -> Option<(usize, &str)> {
        self.timeslots
            .iter()
            .enumerate()
            .find_map(|(i, slot)| slot.room_for(course).map(|room| (i, room)))
    }
}

impl fmt::Display for Schedule {
    /// Formats the schedule as the original exam-scheduler prints it:
    /// a `-TIMESLOT #n-` header per slot, then one course/room line per
    /// placement, tab-aligned (short course names get a second tab).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.timeslots.iter().enumerate() {
            writeln!(f, "-TIMESLOT #{}-", i + 1)?;
            for placement in &slot.placements {
                let pad = if placement.course.len() >= 8 { "\t" } else { "\t\t" };
                writeln!(f, "{}{}{}", placement.course, pad, placement.room)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
