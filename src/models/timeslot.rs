//! Timeslot model.
//!
//! A timeslot is one examination period. It tracks remaining seats per
//! room (counters parallel to the shared room list) and which course sits
//! in which room. The backtracking scheduler mutates timeslots through
//! [`Timeslot::add_course`] and [`Timeslot::remove_course`] as it explores
//! and abandons branches.

use std::collections::HashMap;

use crate::conflicts::ConflictGraph;
use crate::models::{Course, Room};

/// One examination period over a shared room list.
///
/// Courses and rooms are referred to by their indices in the slices the
/// scheduler operates on; the slot itself owns only its counters and its
/// placement map. A fresh slot starts with every room fully available.
#[derive(Debug, Clone)]
pub struct Timeslot {
    /// Remaining seats per room, parallel to the room list.
    remaining_seats: Vec<u32>,
    /// Placed course index → occupied room index.
    placements: HashMap<usize, usize>,
}

impl Timeslot {
    /// Creates a timeslot with every room at full capacity.
    pub fn new(rooms: &[Room]) -> Self {
        Self {
            remaining_seats: rooms.iter().map(|r| r.capacity).collect(),
            placements: HashMap::new(),
        }
    }

    /// Attempts to place a course in this timeslot.
    ///
    /// Fails without any state change when the course conflicts with a
    /// course already placed here, or when no room has enough remaining
    /// seats. Otherwise the course goes into the *first* room (in room
    /// list order) whose remaining seats cover its size; that room's
    /// counter drops by the course size. First-fit is final: the room
    /// choice is never reconsidered within this slot.
    pub fn add_course(
        &mut self,
        course: usize,
        courses: &[Course],
        conflicts: &ConflictGraph,
    ) -> bool {
        if self.has_conflicting_course(course, conflicts) {
            return false;
        }

        let size = courses[course].size();
        for (room, seats) in self.remaining_seats.iter_mut().enumerate() {
            if *seats >= size {
                *seats -= size;
                self.placements.insert(course, room);
                return true;
            }
        }
        false
    }

    /// Removes a previously placed course.
    ///
    /// Returns `false` if the course is not placed in this timeslot.
    /// Restores the occupied room's counter by the room's *full* capacity,
    /// not by the course size. Removal therefore inflates the counter
    /// whenever the removed course was smaller than its room; callers of
    /// the reference program depend on this arithmetic, so it is kept
    /// as-is rather than restoring the course size.
    pub fn remove_course(&mut self, course: usize, rooms: &[Room]) -> bool {
        match self.placements.remove(&course) {
            Some(room) => {
                self.remaining_seats[room] += rooms[room].capacity;
                true
            }
            None => false,
        }
    }

    /// Whether the candidate shares a student with any course placed here.
    ///
    /// Short-circuits on the first conflicting occupant.
    pub fn has_conflicting_course(&self, course: usize, conflicts: &ConflictGraph) -> bool {
        self.placements
            .keys()
            .any(|&placed| conflicts.are_conflicting(placed, course))
    }

    /// Placed (course index, room index) pairs, sorted by room index.
    pub fn placements(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = self.placements.iter().map(|(&c, &r)| (c, r)).collect();
        pairs.sort_by_key(|&(course, room)| (room, course));
        pairs
    }

    /// Remaining seats in a room.
    pub fn remaining_seats(&self, room: usize) -> u32 {
        self.remaining_seats[room]
    }

    /// Number of courses placed in this timeslot.
    pub fn course_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether no course is placed here.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
