//! Course model.
//!
//! A course is the unit being scheduled: a named exam sitting with a set
//! of enrolled students. Two courses that share at least one student are
//! in *conflict* and can never be examined in the same timeslot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A course with its enrolled students.
///
/// Course names identify courses case-insensitively across an input set;
/// the loader and [`crate::validation`] enforce uniqueness. Student IDs
/// are non-negative and unique within a course (the set makes duplicates
/// impossible by construction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course name (unique, case-insensitive).
    pub name: String,
    /// Enrolled student IDs.
    pub students: HashSet<u32>,
}

impl Course {
    /// Creates a course with no students.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: HashSet::new(),
        }
    }

    /// Adds students from an iterator.
    pub fn with_students(mut self, students: impl IntoIterator<Item = u32>) -> Self {
        self.students.extend(students);
        self
    }

    /// Enrolls a single student.
    ///
    /// Returns `false` if the student was already enrolled.
    pub fn add_student(&mut self, student_id: u32) -> bool {
        self.students.insert(student_id)
    }

    /// Number of enrolled students, which is also the number of seats
    /// the course needs in a room.
    #[inline]
    pub fn size(&self) -> u32 {
        self.students.len() as u32
    }

    /// Whether this course shares at least one student with `other`.
    ///
    /// A course never conflicts with itself: comparing a course against
    /// the same instance returns `false` regardless of enrollment.
    pub fn shares_student_with(&self, other: &Course) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.students.iter().any(|s| other.students.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("MATH101").with_students([1, 2, 3]);
        assert_eq!(c.name, "MATH101");
        assert_eq!(c.size(), 3);
        assert!(c.students.contains(&2));
    }

    #[test]
    fn test_add_student_rejects_duplicates() {
        let mut c = Course::new("CS201");
        assert!(c.add_student(7));
        assert!(!c.add_student(7));
        assert_eq!(c.size(), 1);
    }

    #[test]
    fn test_shares_student_with() {
        let a = Course::new("A").with_students([1, 2, 3]);
        let b = Course::new("B").with_students([3, 4]);
        let c = Course::new("C").with_students([5, 6]);

        assert!(a.shares_student_with(&b));
        assert!(b.shares_student_with(&a));
        assert!(!a.shares_student_with(&c));
    }

    #[test]
    fn test_never_conflicts_with_self() {
        let a = Course::new("A").with_students([1, 2]);
        assert!(!a.shares_student_with(&a));
    }

    #[test]
    fn test_empty_course_has_size_zero() {
        let c = Course::new("EMPTY");
        assert_eq!(c.size(), 0);
        let other = Course::new("B").with_students([1]);
        assert!(!c.shares_student_with(&other));
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Course::new("PHYS110").with_students([10, 20]);
        let json = serde_json::to_string(&c).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "PHYS110");
        assert_eq!(back.size(), 2);
    }
}
