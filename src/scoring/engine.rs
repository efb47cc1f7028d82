use crate::tfidf::engine::compute_tf_idf;
use crate::tfidf::tokenizer::tokenize;

/// Scores a user response against a stored reference answer.
///
/// If the two strings produce identical token sequences (including both
/// empty), the score is exactly 1.0. Otherwise the pair is vectorized as a
/// two-document corpus and the score is the cosine similarity of the two
/// L2-normalized columns. A side that tokenizes to nothing is a zero vector,
/// so its dot product with anything is 0.0.
///
/// Any pair of strings has a defined score; this function cannot fail.
pub fn score_answer(stored_answer: &str, user_response: &str) -> f64 {
    let stored_terms = tokenize(stored_answer);
    let response_terms = tokenize(user_response);

    if stored_terms == response_terms {
        return 1.0;
    }

    let corpus = [stored_answer.to_string(), user_response.to_string()];
    // A two-element corpus can never hit the empty-set error.
    let model = match compute_tf_idf(&corpus) {
        Ok(model) => model,
        Err(_) => return 0.0,
    };

    model.weights.iter().map(|row| row[0] * row[1]).sum()
}
