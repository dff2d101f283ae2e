//! Room model.
//!
//! Rooms are the seating resources of a timetable. The room list handed
//! to the scheduler is shared read-only across all timeslots and sorted
//! ascending by capacity, so first-fit placement tries small rooms first.

use serde::{Deserialize, Serialize};

/// An exam room with a fixed seating capacity.
///
/// Room names identify rooms case-insensitively. Rooms are immutable;
/// all remaining-seat bookkeeping lives in [`crate::models::Timeslot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room name (unique, case-insensitive).
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a room.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// Sorts rooms ascending by capacity, keeping input order among equals.
///
/// The scheduler expects its room list in this order; the loader applies
/// it automatically after reading a room file.
pub fn sort_rooms_by_capacity(rooms: &mut [Room]) {
    rooms.sort_by_key(|r| r.capacity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_new() {
        let r = Room::new("GYM", 250);
        assert_eq!(r.name, "GYM");
        assert_eq!(r.capacity, 250);
    }

    #[test]
    fn test_sort_rooms_ascending() {
        let mut rooms = vec![
            Room::new("BIG", 300),
            Room::new("SMALL", 20),
            Room::new("MID", 80),
        ];
        sort_rooms_by_capacity(&mut rooms);
        let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["SMALL", "MID", "BIG"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_capacities() {
        let mut rooms = vec![
            Room::new("A", 50),
            Room::new("B", 50),
            Room::new("C", 10),
        ];
        sort_rooms_by_capacity(&mut rooms);
        let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
