//! Student-conflict graph.
//!
//! Two courses conflict when their student sets intersect; conflicting
//! courses must land in different timeslots. The graph is built exactly
//! once, after the course list is finalized and before scheduling, and
//! is read-only for the rest of the run.

use std::collections::HashSet;

use crate::models::Course;

/// Adjacency relation over course indices.
///
/// Index `i` refers to position `i` in the course slice the graph was
/// built from. The relation is symmetric and contains no self-edges.
///
/// # Complexity
/// Building is O(N² · S) for N courses with average student-set size S
/// (pairwise set-membership tests).
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    adjacency: Vec<HashSet<usize>>,
}

impl ConflictGraph {
    /// Builds the conflict graph for a course list.
    ///
    /// Deterministic and idempotent: the resulting relation depends only
    /// on the student sets, not on the order pairs are visited.
    pub fn build(courses: &[Course]) -> Self {
        let mut adjacency = vec![HashSet::new(); courses.len()];

        for i in 0..courses.len() {
            for j in (i + 1)..courses.len() {
                if courses[i].shares_student_with(&courses[j]) {
                    adjacency[i].insert(j);
                    adjacency[j].insert(i);
                }
            }
        }

        Self { adjacency }
    }

    /// Whether courses `a` and `b` share at least one student.
    #[inline]
    pub fn are_conflicting(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// The set of courses conflicting with `course`.
    pub fn conflicts_of(&self, course: usize) -> &HashSet<usize> {
        &self.adjacency[course]
    }

    /// Number of courses the graph was built over.
    pub fn course_count(&self) -> usize {
        self.adjacency.len()
    }
}
