use crate::features::reviews::models::Review;

/// Per-course statistics over approved reviews.
///
/// Averages are rounded to one decimal and absent when there is nothing to
/// average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CourseStats {
    pub review_count: i64,
    pub avg_rating: Option<f64>,
    pub avg_difficulty: Option<f64>,
    pub avg_workload: Option<f64>,
}

impl CourseStats {
    /// Aggregate the approved reviews among `reviews`; other statuses are skipped
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut count = 0i64;
        let (mut rating, mut difficulty, mut workload) = (0i64, 0i64, 0i64);

        for review in reviews.into_iter().filter(|r| r.status.is_public()) {
            count += 1;
            rating += i64::from(review.rating);
            difficulty += i64::from(review.difficulty);
            workload += i64::from(review.workload);
        }

        if count == 0 {
            return Self::default();
        }

        Self {
            review_count: count,
            avg_rating: Some(mean(rating, count)),
            avg_difficulty: Some(mean(difficulty, count)),
            avg_workload: Some(mean(workload, count)),
        }
    }
}

fn mean(sum: i64, count: i64) -> f64 {
    round_one_decimal(sum as f64 / count as f64)
}

/// Round half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reviews::models::ReviewStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn review(rating: i32, difficulty: i32, workload: i32, status: ReviewStatus) -> Review {
        Review {
            id: Uuid::new_v4(),
            course_id: Uuid::nil(),
            rating,
            difficulty,
            workload,
            comment: None,
            semester: None,
            year: None,
            anonymous_id: "anon_test".to_string(),
            flag_count: 0,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_set_has_no_averages() {
        let stats = CourseStats::from_reviews(std::iter::empty());

        assert_eq!(stats.review_count, 0);
        assert_eq!(stats.avg_rating, None);
        assert_eq!(stats.avg_difficulty, None);
        assert_eq!(stats.avg_workload, None);
    }

    #[test]
    fn test_two_ratings_average() {
        let reviews = vec![
            review(5, 2, 3, ReviewStatus::Approved),
            review(4, 3, 4, ReviewStatus::Approved),
        ];
        let stats = CourseStats::from_reviews(&reviews);

        assert_eq!(stats.review_count, 2);
        assert_eq!(stats.avg_rating, Some(4.5));
        assert_eq!(stats.avg_difficulty, Some(2.5));
        assert_eq!(stats.avg_workload, Some(3.5));
    }

    #[test]
    fn test_three_ratings_round_to_one_decimal() {
        let reviews = vec![
            review(5, 1, 2, ReviewStatus::Approved),
            review(4, 1, 2, ReviewStatus::Approved),
            review(4, 2, 3, ReviewStatus::Approved),
        ];
        let stats = CourseStats::from_reviews(&reviews);

        assert_eq!(stats.review_count, 3);
        assert_eq!(stats.avg_rating, Some(4.3));
        assert_eq!(stats.avg_difficulty, Some(1.3));
        assert_eq!(stats.avg_workload, Some(2.3));
    }

    #[test]
    fn test_unapproved_reviews_are_ignored() {
        let reviews = vec![
            review(1, 1, 1, ReviewStatus::Pending),
            review(1, 1, 1, ReviewStatus::Flagged),
            review(1, 1, 1, ReviewStatus::Rejected),
            review(5, 5, 5, ReviewStatus::Approved),
        ];
        let stats = CourseStats::from_reviews(&reviews);

        assert_eq!(stats.review_count, 1);
        assert_eq!(stats.avg_rating, Some(5.0));
    }

    #[test]
    fn test_only_unapproved_reviews_yield_empty_stats() {
        let reviews = vec![review(3, 3, 3, ReviewStatus::Pending)];
        assert_eq!(CourseStats::from_reviews(&reviews), CourseStats::default());
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(4.25), 4.3);
        assert_eq!(round_one_decimal(3.666_666), 3.7);
        assert_eq!(round_one_decimal(2.0), 2.0);
        assert_eq!(round_one_decimal(1.04), 1.0);
    }
}
