use std::collections::BTreeMap;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::model::{Answer, AnswerDetail, Question, Submission, SubmissionPayload};

/// Join each answer to its question definition and build the request body.
///
/// An answer whose question id resolves to no known question is dropped,
/// not defaulted; `answers_count` counts what is actually sent. A
/// submission without a secure key gets a fresh one.
pub fn build_payload(
    submission: &Submission,
    answers: &[Answer],
    questions: &[Question],
) -> SubmissionPayload {
    let mut details = BTreeMap::new();
    for answer in answers {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            debug!(
                "Dropping answer to unknown question {}",
                answer.question_id
            );
            continue;
        };

        details.insert(
            question.id.to_string(),
            AnswerDetail {
                question_id: question.id,
                question_text: question.text.clone(),
                question_type: question.question_type.clone(),
                answer: answer.value.clone(),
                section_id: question.section_id,
                parent_id: question.parent_id,
                is_required: question.is_required,
            },
        );
    }

    SubmissionPayload {
        submission_id: submission.id.clone(),
        secure_key: submission
            .secure_key
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        submitted_at: Utc::now(),
        answers_count: details.len(),
        answers: details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            text: text.to_string(),
            question_type: "text".to_string(),
            section_id: Some(1),
            parent_id: None,
            is_required: true,
        }
    }

    fn answer(question_id: i64, value: &str) -> Answer {
        Answer {
            question_id,
            value: value.to_string(),
        }
    }

    fn submission() -> Submission {
        Submission {
            id: "sub-42".to_string(),
            secure_key: Some("key-42".to_string()),
        }
    }

    #[test]
    fn joins_answers_to_their_questions() {
        let questions = vec![question(1, "Fumez-vous ?"), question(2, "Âge ?")];
        let answers = vec![answer(1, "non"), answer(2, "54")];

        let payload = build_payload(&submission(), &answers, &questions);

        assert_eq!(payload.submission_id, "sub-42");
        assert_eq!(payload.secure_key, "key-42");
        assert_eq!(payload.answers_count, 2);

        let detail = &payload.answers["1"];
        assert_eq!(detail.question_text, "Fumez-vous ?");
        assert_eq!(detail.answer, "non");
        assert_eq!(detail.section_id, Some(1));
        assert!(detail.is_required);
    }

    #[test]
    fn unresolvable_answers_are_dropped() {
        let questions = vec![question(1, "Fumez-vous ?")];
        let answers = vec![answer(1, "non"), answer(99, "orpheline")];

        let payload = build_payload(&submission(), &answers, &questions);

        assert_eq!(payload.answers_count, 1);
        assert!(!payload.answers.contains_key("99"));
    }

    #[test]
    fn missing_secure_key_gets_generated() {
        let submission = Submission {
            id: "sub-7".to_string(),
            secure_key: None,
        };

        let payload = build_payload(&submission, &[], &[]);
        assert!(!payload.secure_key.is_empty());
        assert_eq!(payload.answers_count, 0);
    }

    #[test]
    fn payload_serializes_with_stringified_question_keys() {
        let questions = vec![question(12, "Antécédents ?")];
        let answers = vec![answer(12, "aucun")];

        let payload = build_payload(&submission(), &answers, &questions);
        let json = serde_json::to_value(&payload).expect("payload serializes");

        assert!(json["answers"]["12"].is_object());
        assert_eq!(json["answers"]["12"]["question_type"], "text");
        assert_eq!(json["answers"]["12"]["answer"], "aucun");
        assert_eq!(json["answers_count"], 1);
    }
}
