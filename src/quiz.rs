//! Next-question selection for quiz play.

use std::collections::HashSet;

use rand::{seq::IndexedRandom, Rng};

use crate::models::Question;

/// Pick one question from `category_questions` whose id is not in `previous`
///
/// Returns `None` once every question of the category has been seen.
/// Duplicate or foreign ids in `previous` are ignored.
pub fn select_next_question<R: Rng + ?Sized>(
    category_questions: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let remaining: Vec<Question> = category_questions
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn questions(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|&id| Question {
                id,
                question: format!("Question {}", id),
                answer: format!("Answer {}", id),
                category: 2,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn test_never_returns_previous_question() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let picked = select_next_question(questions(&[16, 17, 18, 19]), &[17, 19], &mut rng)
                .unwrap();
            assert!(picked.id == 16 || picked.id == 18);
        }
    }

    #[test]
    fn test_selection_covers_all_remaining() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut picked = HashSet::new();

        for _ in 0..200 {
            let q = select_next_question(questions(&[1, 2, 3]), &[], &mut rng).unwrap();
            picked.insert(q.id);
        }

        assert_eq!(picked, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_exhausted_category() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_next_question(questions(&[16, 17, 18, 19]), &[16, 17, 18, 19], &mut rng);
        assert!(picked.is_none());
    }

    #[test]
    fn test_empty_category() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_next_question(Vec::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn test_duplicate_previous_ids_do_not_exhaust() {
        // As many previous ids as questions, but 19 was never seen
        let mut rng = StdRng::seed_from_u64(3);
        let picked =
            select_next_question(questions(&[16, 17, 18, 19]), &[16, 16, 17, 18], &mut rng);
        assert_eq!(picked.map(|q| q.id), Some(19));
    }

    #[test]
    fn test_foreign_previous_ids_are_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let picked = select_next_question(questions(&[16, 17]), &[16, 500], &mut rng);
        assert_eq!(picked.map(|q| q.id), Some(17));
    }
}
