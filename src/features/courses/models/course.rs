use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for course
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub department: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters for the public course listing.
///
/// `department` is an exact match; `search` is a case-insensitive substring
/// match against name, code or description. Both combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub department: Option<String>,
    pub search: Option<String>,
}

impl CourseFilter {
    /// Build a filter from raw query values; empty values mean "no filter".
    /// The search term is matched as given, surrounding whitespace included.
    pub fn new(department: Option<String>, search: Option<String>) -> Self {
        Self {
            department: department.filter(|d| !d.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// In-process equivalent of the storage query
    #[cfg(test)]
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(department) = &self.department {
            if &course.department != department {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(search) => {
                let needle = search.to_lowercase();
                course.name.to_lowercase().contains(&needle)
                    || course.code.to_lowercase().contains(&needle)
                    || course
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
        }
    }

    /// `ILIKE` pattern for the search term with LIKE metacharacters escaped
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|search| {
            let mut escaped = String::with_capacity(search.len() + 2);
            escaped.push('%');
            for c in search.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str, department: &str, description: Option<&str>) -> Course {
        Course {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            description: description.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let filter = CourseFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(filter, CourseFilter::default());
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let filter = CourseFilter::new(None, Some(" cs".to_string()));

        assert_eq!(filter.search.as_deref(), Some(" cs"));
        assert_eq!(filter.search_pattern().as_deref(), Some("% cs%"));
        assert!(filter.matches(&course("CS310", "Intro to CS", "Computer Science", None)));
        assert!(!filter.matches(&course("CS101", "Programming", "Computer Science", None)));
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let filter = CourseFilter::new(None, Some("cs".to_string()));

        assert!(filter.matches(&course("CS101", "Intro", "Computer Science", None)));
        assert!(filter.matches(&course(
            "MATH210",
            "Discrete Mathematics",
            "Mathematics",
            Some("Logic, sets and graph basics")
        )));
        assert!(!filter.matches(&course(
            "ENG201",
            "Technical Writing",
            "English",
            Some("Writing for professional contexts")
        )));
    }

    #[test]
    fn test_department_is_exact_match() {
        let filter = CourseFilter::new(Some("Mathematics".to_string()), None);

        assert!(filter.matches(&course("MATH101", "Calculus I", "Mathematics", None)));
        assert!(!filter.matches(&course("MATH900", "History", "mathematics", None)));
        assert!(!filter.matches(&course("AMATH1", "Applied", "Applied Mathematics", None)));
    }

    #[test]
    fn test_department_and_search_combine() {
        let filter = CourseFilter::new(
            Some("Computer Science".to_string()),
            Some("data".to_string()),
        );

        assert!(filter.matches(&course(
            "CS201",
            "Data Structures",
            "Computer Science",
            None
        )));
        assert!(!filter.matches(&course("CS101", "Intro", "Computer Science", None)));
        assert!(!filter.matches(&course("STAT1", "Data Analysis", "Statistics", None)));
    }

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        let filter = CourseFilter::new(None, Some("50%_off\\".to_string()));
        assert_eq!(
            filter.search_pattern().as_deref(),
            Some("%50\\%\\_off\\\\%")
        );
        assert_eq!(CourseFilter::default().search_pattern(), None);
    }
}
