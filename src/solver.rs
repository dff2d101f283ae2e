//! Backtracking timeslot assignment.
//!
//! # Algorithm
//!
//! 1. Build the student-conflict graph over all courses.
//! 2. Order courses by enrollment size, largest first (most-constrained
//!    courses are the hardest to place, so they go in early).
//! 3. Depth-first search over `(course, timeslot)` pairs: place the
//!    current course in the first timeslot that admits it, recurse on the
//!    next course starting again at timeslot 0, and on failure undo the
//!    placement and retry the same course one timeslot later. Timeslots
//!    are materialized lazily up to the configured budget.
//!
//! Room selection inside a timeslot is first-fit over remaining seats and
//! is never revisited; the search backtracks across timeslots only. An
//! instance that would be feasible under room-level backtracking can
//! therefore still be reported infeasible.
//!
//! # Complexity
//! Worst case exponential in courses × timeslot budget; no memoization.

use log::{debug, info, trace};

use crate::conflicts::ConflictGraph;
use crate::models::{Course, Placement, Room, Schedule, SlotAssignments, Timeslot};

/// Depth-first backtracking scheduler.
///
/// Expects the room list sorted ascending by capacity (the loader and
/// [`crate::models::sort_rooms_by_capacity`] produce this order) and
/// input that already passed structural validation; the solver itself
/// does not re-validate.
///
/// # Example
///
/// ```
/// use exam_schedule::models::{Course, Room};
/// use exam_schedule::solver::BacktrackingScheduler;
///
/// let courses = vec![
///     Course::new("MATH").with_students([1, 2, 3]),
///     Course::new("ART").with_students([4]),
/// ];
/// let rooms = vec![Room::new("HALL", 40)];
///
/// let schedule = BacktrackingScheduler::new()
///     .schedule(&courses, &rooms, 3)
///     .unwrap();
/// assert_eq!(schedule.placement_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler;

impl BacktrackingScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Searches for a complete assignment within `max_slots` timeslots.
    ///
    /// Returns `None` when no feasible assignment exists inside the
    /// budget; every tentative placement of the failed search has been
    /// undone by then, so there is no partial result to expose. With an
    /// empty course list the search trivially succeeds with an empty
    /// schedule, even for `max_slots == 0`.
    pub fn schedule(
        &self,
        courses: &[Course],
        rooms: &[Room],
        max_slots: usize,
    ) -> Option<Schedule> {
        info!(
            "scheduling {} courses across {} rooms, at most {} timeslots",
            courses.len(),
            rooms.len(),
            max_slots
        );

        let conflicts = ConflictGraph::build(courses);

        // Largest enrollment first; stable, so equal sizes keep input order.
        let mut order: Vec<usize> = (0..courses.len()).collect();
        order.sort_by(|&a, &b| courses[b].size().cmp(&courses[a].size()));

        let mut search = Search {
            courses,
            rooms,
            conflicts: &conflicts,
            order,
            max_slots,
            timeslots: Vec::new(),
        };

        if !search.place(0, 0) {
            info!("no feasible schedule within {} timeslots", max_slots);
            return None;
        }

        info!(
            "schedule found using {} materialized timeslots",
            search.timeslots.len()
        );
        Some(search.into_schedule())
    }
}

struct Search<'a> {
    courses: &'a [Course],
    rooms: &'a [Room],
    conflicts: &'a ConflictGraph,
    /// Course indices in placement order (descending enrollment).
    order: Vec<usize>,
    max_slots: usize,
    /// Lazily materialized; grows but never shrinks during the search.
    timeslots: Vec<Timeslot>,
}

impl Search<'_> {
    /// Places `self.order[position..]`, trying the current course in
    /// timeslot `slot` first.
    fn place(&mut self, position: usize, slot: usize) -> bool {
        if position == self.order.len() {
            return true;
        }
        if slot == self.max_slots {
            return false;
        }

        if slot == self.timeslots.len() {
            debug!("materializing timeslot {}", slot + 1);
            self.timeslots.push(Timeslot::new(self.rooms));
        }

        let course = self.order[position];
        if self.timeslots[slot].add_course(course, self.courses, self.conflicts) {
            if self.place(position + 1, 0) {
                return true;
            }
            trace!(
                "backtracking '{}' out of timeslot {}",
                self.courses[course].name,
                slot + 1
            );
            self.timeslots[slot].remove_course(course, self.rooms);
        }

        self.place(position, slot + 1)
    }

    fn into_schedule(self) -> Schedule {
        let timeslots = self
            .timeslots
            .iter()
            .map(|slot| SlotAssignments {
                placements: slot
                    .placements()
                    .into_iter()
                    .map(|(course, room)| Placement {
                        course: self.courses[course].name.clone(),
                        room: self.rooms[room].name.clone(),
                    })
                    .collect(),
            })
            .collect();
        Schedule { timeslots }
    }
}
