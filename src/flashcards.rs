use rand::Rng;

use crate::models::Flashcard;

/// Number of flashcards produced per generation request.
pub const DEFAULT_FLASHCARD_COUNT: usize = 5;

/// Sample up to `count` sentence fragments from `text` as new flashcards.
///
/// Fragments are the period-plus-space splits of the text, trimmed, with
/// empty fragments discarded. Sampling is uniform without replacement, so
/// the output holds `min(count, fragments)` cards with no duplicates. Ids
/// continue the sequence from `existing_count` so repeated generations never
/// collide. The RNG is injected: the service passes `thread_rng`, tests a
/// seeded one.
pub fn generate_flashcards<R: Rng>(
    text: &str,
    count: usize,
    existing_count: usize,
    rng: &mut R,
) -> Vec<Flashcard> {
    let mut pool: Vec<&str> = text
        .split(". ")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let take = count.min(pool.len());
    let mut cards = Vec::with_capacity(take);

    for i in 0..take {
        let index = rng.gen_range(0..pool.len());
        let fragment = pool.swap_remove(index);
        cards.push(Flashcard {
            id: (existing_count + i + 1) as u64,
            content: fragment.to_string(),
            next_review: None,
            easiness_streak: 0,
        });
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEXT: &str = "Rust is a systems language. It has no garbage collector. \
                        Ownership rules are checked at compile time. Borrowing prevents data races. \
                        Traits describe shared behavior. Cargo manages builds and dependencies.";

    #[test]
    fn test_generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = generate_flashcards(TEXT, 5, 0, &mut rng);

        assert_eq!(cards.len(), 5);
        for card in &cards {
            assert!(!card.content.is_empty());
            assert!(card.next_review.is_none());
            assert_eq!(card.easiness_streak, 0);
        }
    }

    #[test]
    fn test_ids_continue_from_existing_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = generate_flashcards(TEXT, 3, 10, &mut rng);

        let ids: Vec<u64> = cards.iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![11, 12, 13]);
    }

    #[test]
    fn test_pool_exhaustion_caps_output() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = generate_flashcards("One sentence. Another one.", 5, 0, &mut rng);

        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn test_sampling_without_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let cards = generate_flashcards(TEXT, 6, 0, &mut rng);

        let mut contents: Vec<&str> = cards.iter().map(|card| card.content.as_str()).collect();
        contents.sort_unstable();
        contents.dedup();
        assert_eq!(contents.len(), cards.len());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let first = generate_flashcards(TEXT, 4, 0, &mut StdRng::seed_from_u64(99));
        let second = generate_flashcards(TEXT, 4, 0, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_no_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_flashcards("", 5, 0, &mut rng).is_empty());
        assert!(generate_flashcards(". . . ", 5, 0, &mut rng).is_empty());
    }
}
