use crate::models::Question;

/// Find a question by id. The first match wins if ids repeat.
pub fn find_by_id(questions: &[Question], id: i64) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}

/// Ids of every question, in collection order.
pub fn available_ids(questions: &[Question]) -> Vec<i64> {
    questions.iter().map(|question| question.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, prompt: &str) -> Question {
        Question {
            id,
            category: "General".to_string(),
            prompt: prompt.to_string(),
            choices: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 0,
        }
    }

    #[test]
    fn test_find_by_id() {
        let questions = vec![question(3, "three"), question(1, "one"), question(2, "two")];

        for expected in &questions {
            let found = find_by_id(&questions, expected.id).unwrap();
            assert_eq!(found, expected);
        }

        assert!(find_by_id(&questions, 99).is_none());
        assert!(find_by_id(&[], 1).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let questions = vec![question(5, "first"), question(5, "second")];
        assert_eq!(find_by_id(&questions, 5).unwrap().prompt, "first");
    }

    #[test]
    fn test_available_ids_keeps_order() {
        let questions = vec![question(10, "x"), question(4, "y"), question(7, "z")];
        assert_eq!(available_ids(&questions), vec![10, 4, 7]);
    }
}
