//! Structural validation for timetabling input.
//!
//! The loader enforces these rules while parsing; this module covers
//! programmatically constructed input. It checks what the scheduler
//! assumes but never re-checks:
//! - Course names start with an ASCII letter
//! - Course names are unique (case-insensitive)
//! - Room names are unique (case-insensitive)
//! - The room list is sorted ascending by capacity
//!
//! All problems are collected and reported together rather than stopping
//! at the first one.

use std::collections::HashSet;

use crate::models::{Course, Room};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course name does not start with an ASCII letter.
    InvalidCourseName,
    /// Two courses share a name (case-insensitive).
    DuplicateCourseName,
    /// Two rooms share a name (case-insensitive).
    DuplicateRoomName,
    /// The room list is not sorted ascending by capacity.
    RoomsNotSorted,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates courses and rooms before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(courses: &[Course], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_names = HashSet::new();
    for course in courses {
        if !course
            .name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseName,
                format!("course name '{}' must start with a letter", course.name),
            ));
        }
        if !course_names.insert(course.name.to_ascii_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseName,
                format!("duplicate course name: {}", course.name),
            ));
        }
    }

    let mut room_names = HashSet::new();
    for room in rooms {
        if !room_names.insert(room.name.to_ascii_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoomName,
                format!("duplicate room name: {}", room.name),
            ));
        }
    }

    if rooms.windows(2).any(|w| w[0].capacity > w[1].capacity) {
        errors.push(ValidationError::new(
            ValidationErrorKind::RoomsNotSorted,
            "room list must be sorted ascending by capacity",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rooms() -> Vec<Room> {
        vec![Room::new("LAB", 25), Room::new("GYM", 300)]
    }

    #[test]
    fn test_valid_input() {
        let courses = vec![
            Course::new("MATH101").with_students([1, 2]),
            Course::new("CS201").with_students([2, 3]),
        ];
        assert!(validate_input(&courses, &sample_rooms()).is_ok());
    }

    #[test]
    fn test_duplicate_course_name_ignores_case() {
        let courses = vec![Course::new("Math"), Course::new("MATH")];
        let errors = validate_input(&courses, &sample_rooms()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourseName));
    }

    #[test]
    fn test_invalid_course_name() {
        let courses = vec![Course::new("9LIVES"), Course::new("")];
        let errors = validate_input(&courses, &sample_rooms()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidCourseName)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_room_name() {
        let rooms = vec![Room::new("gym", 10), Room::new("GYM", 20)];
        let errors = validate_input(&[], &rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateRoomName));
    }

    #[test]
    fn test_unsorted_rooms() {
        let rooms = vec![Room::new("GYM", 300), Room::new("LAB", 25)];
        let errors = validate_input(&[], &rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RoomsNotSorted));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let courses = vec![Course::new("1BAD"), Course::new("A"), Course::new("a")];
        let rooms = vec![Room::new("R", 10), Room::new("r", 5)];
        let errors = validate_input(&courses, &rooms).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
