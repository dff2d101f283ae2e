//! Text-format loader for course and room definitions.
//!
//! Both formats are whitespace-token streams:
//!
//! * **Course file** — a token starting with a letter opens a new course;
//!   every integer token enrolls a student in the most recent course.
//! * **Room file** — alternating `name capacity` token pairs.
//!
//! The loader enforces everything the scheduler assumes: non-empty input,
//! course names starting with an ASCII letter, case-insensitive name
//! uniqueness, non-negative unique student IDs, and non-negative room
//! capacities. Rooms come back sorted ascending by capacity, ready for
//! the scheduler's first-fit scan.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::{sort_rooms_by_capacity, Course, Room};

/// Errors produced while reading or parsing an input file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file contains no tokens.
    EmptyFile,
    /// A course name does not start with an ASCII letter, or an integer
    /// token appeared before any course was opened.
    InvalidCourseName(String),
    /// A course name repeats (case-insensitive).
    DuplicateCourseName(String),
    /// A student ID is negative or does not fit 32 bits.
    InvalidStudentId(i64),
    /// A student ID repeats within one course.
    DuplicateStudentId { course: String, student: u32 },
    /// A room name has no capacity token after it.
    MissingCapacity(String),
    /// A room capacity token is not an integer.
    InvalidCapacity { room: String, token: String },
    /// A room capacity is negative.
    NegativeCapacity { room: String, capacity: i64 },
    /// A room name repeats (case-insensitive).
    DuplicateRoomName(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read file: {err}"),
            LoadError::EmptyFile => write!(f, "file contains no tokens"),
            LoadError::InvalidCourseName(name) => {
                write!(f, "invalid course name '{name}': must start with a letter")
            }
            LoadError::DuplicateCourseName(name) => {
                write!(f, "duplicate course name '{name}'")
            }
            LoadError::InvalidStudentId(id) => {
                write!(f, "student ID {id} is out of range (non-negative 32-bit)")
            }
            LoadError::DuplicateStudentId { course, student } => {
                write!(f, "student {student} listed twice in course '{course}'")
            }
            LoadError::MissingCapacity(room) => {
                write!(f, "room '{room}' has no capacity value")
            }
            LoadError::InvalidCapacity { room, token } => {
                write!(f, "room '{room}' has non-numeric capacity '{token}'")
            }
            LoadError::NegativeCapacity { room, capacity } => {
                write!(f, "room '{room}' has negative capacity {capacity}")
            }
            LoadError::DuplicateRoomName(name) => {
                write!(f, "duplicate room name '{name}'")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Reads and parses a course file.
pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<Course>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_courses(&text)
}

/// Reads and parses a room file; rooms come back sorted by capacity.
pub fn load_rooms(path: impl AsRef<Path>) -> Result<Vec<Room>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_rooms(&text)
}

/// Parses course definitions from text.
///
/// Tokens that parse as integers enroll students in the current course;
/// any other token opens a new course and must be a valid, unused name.
pub fn parse_courses(text: &str) -> Result<Vec<Course>, LoadError> {
    let mut courses: Vec<Course> = Vec::new();

    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(id) => {
                let student =
                    u32::try_from(id).map_err(|_| LoadError::InvalidStudentId(id))?;
                let course = courses
                    .last_mut()
                    .ok_or_else(|| LoadError::InvalidCourseName(token.to_string()))?;
                if !course.add_student(student) {
                    return Err(LoadError::DuplicateStudentId {
                        course: course.name.clone(),
                        student,
                    });
                }
            }
            Err(_) => {
                if !is_valid_course_name(token) {
                    return Err(LoadError::InvalidCourseName(token.to_string()));
                }
                if courses.iter().any(|c| c.name.eq_ignore_ascii_case(token)) {
                    return Err(LoadError::DuplicateCourseName(token.to_string()));
                }
                courses.push(Course::new(token));
            }
        }
    }

    if courses.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    debug!("loaded {} courses", courses.len());
    Ok(courses)
}

/// Parses room definitions from text and sorts them ascending by capacity.
pub fn parse_rooms(text: &str) -> Result<Vec<Room>, LoadError> {
    let mut rooms: Vec<Room> = Vec::new();
    let mut tokens = text.split_whitespace();

    while let Some(name) = tokens.next() {
        let capacity_token = tokens
            .next()
            .ok_or_else(|| LoadError::MissingCapacity(name.to_string()))?;
        let capacity: i64 =
            capacity_token
                .parse()
                .map_err(|_| LoadError::InvalidCapacity {
                    room: name.to_string(),
                    token: capacity_token.to_string(),
                })?;
        if capacity < 0 {
            return Err(LoadError::NegativeCapacity {
                room: name.to_string(),
                capacity,
            });
        }
        if rooms.iter().any(|r| r.name.eq_ignore_ascii_case(name)) {
            return Err(LoadError::DuplicateRoomName(name.to_string()));
        }
        rooms.push(Room::new(name, capacity as u32));
    }

    if rooms.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    sort_rooms_by_capacity(&mut rooms);
    debug!("loaded {} rooms", rooms.len());
    Ok(rooms)
}

/// A course name must start with an ASCII letter.
fn is_valid_course_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_courses() {
        let courses = parse_courses("MATH101 1 2 3\nCS201 2 4\nART1").unwrap();
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].name, "MATH101");
        assert_eq!(courses[0].size(), 3);
        assert_eq!(courses[1].size(), 2);
        assert_eq!(courses[2].size(), 0);
    }

    #[test]
    fn test_course_file_must_open_with_a_name() {
        assert!(matches!(
            parse_courses("12 MATH 3"),
            Err(LoadError::InvalidCourseName(_))
        ));
    }

    #[test]
    fn test_invalid_course_name() {
        assert!(matches!(
            parse_courses("MATH 1\n9LIVES 2"),
            Err(LoadError::InvalidCourseName(_))
        ));
        // A non-integer token that still doesn't start with a letter.
        assert!(matches!(
            parse_courses("MATH 1 3.5"),
            Err(LoadError::InvalidCourseName(_))
        ));
    }

    #[test]
    fn test_duplicate_course_name_case_insensitive() {
        assert!(matches!(
            parse_courses("MATH 1\nmath 2"),
            Err(LoadError::DuplicateCourseName(_))
        ));
    }

    #[test]
    fn test_negative_student_id() {
        assert!(matches!(
            parse_courses("MATH 1 -3"),
            Err(LoadError::InvalidStudentId(-3))
        ));
        assert!(matches!(
            parse_courses("MATH 1 5000000000"),
            Err(LoadError::InvalidStudentId(_))
        ));
    }

    #[test]
    fn test_duplicate_student_within_course() {
        assert!(matches!(
            parse_courses("MATH 1 2 1"),
            Err(LoadError::DuplicateStudentId { .. })
        ));
        // The same student in two different courses is fine.
        assert!(parse_courses("MATH 1\nCS 1").is_ok());
    }

    #[test]
    fn test_empty_course_file() {
        assert!(matches!(parse_courses("  \n\t "), Err(LoadError::EmptyFile)));
    }

    #[test]
    fn test_parse_rooms_sorted_ascending() {
        let rooms = parse_rooms("GYM 300 LAB 25 HALL 90").unwrap();
        let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["LAB", "HALL", "GYM"]);
        assert_eq!(rooms[0].capacity, 25);
    }

    #[test]
    fn test_room_errors() {
        assert!(matches!(
            parse_rooms("GYM"),
            Err(LoadError::MissingCapacity(_))
        ));
        assert!(matches!(
            parse_rooms("GYM big"),
            Err(LoadError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            parse_rooms("GYM -5"),
            Err(LoadError::NegativeCapacity { .. })
        ));
        assert!(matches!(
            parse_rooms("GYM 10 gym 20"),
            Err(LoadError::DuplicateRoomName(_))
        ));
        assert!(matches!(parse_rooms(""), Err(LoadError::EmptyFile)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_courses("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().contains("failed to read file"));
    }
}
