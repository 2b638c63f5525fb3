//! Tests for plain-text puzzle rendering

#[cfg(test)]
mod tests {
    use wordgrid::algorithm::placement::place;
    use wordgrid::io::render::{RenderOptions, render_puzzle};
    use wordgrid::{Direction, GenerationOutcome, WordGrid, WordPlacement};

    fn sample_outcome() -> GenerationOutcome {
        let mut grid = WordGrid::new(4, 3);
        place(&mut grid, "CAT", 0, 0, Direction::Horizontal);
        place(&mut grid, "AXE", 1, 0, Direction::Vertical);
        GenerationOutcome {
            grid,
            placed: vec![
                WordPlacement::new("CAT", 0, 0, Direction::Horizontal),
                WordPlacement::new("AXE", 1, 0, Direction::Vertical),
            ],
            dropped: vec!["ELEPHANT".to_string()],
        }
    }

    fn render(outcome: &GenerationOutcome, options: RenderOptions) -> String {
        let mut out = Vec::new();
        assert!(render_puzzle(&mut out, outcome, options).is_ok());
        String::from_utf8(out).unwrap_or_default()
    }

    // Tests the bare grid is followed only by the dropped word note
    // Verified by hiding dropped words when no sections are requested
    #[test]
    fn test_grid_only() {
        let text = render(&sample_outcome(), RenderOptions::default());

        assert_eq!(
            text,
            "C A T .\n. X . .\n. E . .\n\nNot placed: ELEPHANT\n"
        );
    }

    // Tests the word list names placed words in placement order
    // Verified by listing dropped words as findable
    #[test]
    fn test_word_list() {
        let options = RenderOptions {
            word_list: true,
            answer_key: false,
        };
        let text = render(&sample_outcome(), options);

        assert!(text.contains("Words to find: CAT, AXE\n"));
        assert!(!text.contains("Answers:"));
    }

    // Tests the answer key aligns words and shows anchor and direction
    // Verified by printing the anchor as (y, x)
    #[test]
    fn test_answer_key() {
        let options = RenderOptions {
            word_list: false,
            answer_key: true,
        };
        let text = render(&sample_outcome(), options);

        assert!(text.contains("Answers:\n  CAT  (0, 0) horizontal\n  AXE  (1, 0) vertical\n"));
    }

    // Tests a complete puzzle has no dropped word note
    // Verified by always printing the note
    #[test]
    fn test_complete_puzzle_has_no_note() {
        let mut outcome = sample_outcome();
        outcome.dropped.clear();

        let text = render(&outcome, RenderOptions::default());

        assert!(!text.contains("Not placed"));
        assert_eq!(text.lines().count(), 3);
    }
}
