//! Tests for generator configuration, word validation and placement strategies

#[cfg(test)]
mod tests {
    use wordgrid::algorithm::executor::{
        GeneratorConfig, WordSearchGenerator, anchor_range, generate,
    };
    use wordgrid::io::configuration::{INTERSECTION_PROBABILITY, MAX_RANDOM_ATTEMPTS};
    use wordgrid::{Direction, WordGridError};

    // Tests anchor ranges keep words inside the axis for every step sign
    // Verified by leaving the upper bound unreduced
    #[test]
    fn test_anchor_range_per_axis_step() {
        assert_eq!(anchor_range(5, 3, 1), 0..3);
        assert_eq!(anchor_range(5, 3, 0), 0..5);
        assert_eq!(anchor_range(5, 3, -1), 2..5);
        assert_eq!(anchor_range(5, 5, 1), 0..1);
        assert!(anchor_range(3, 4, 1).is_empty());
        assert!(anchor_range(3, 4, -1).is_empty());
    }

    // Tests defaults mirror the named constants
    // Verified by hardcoding a different retry budget
    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new(8, 6);

        assert_eq!(config.max_random_attempts, MAX_RANDOM_ATTEMPTS);
        assert!((config.intersection_probability - INTERSECTION_PROBABILITY).abs() < f64::EPSILON);
        assert!(!config.allow_diagonal);
        assert!(!config.fill_grid);
        assert_eq!(config.directions().len(), 2);
        assert_eq!(config.with_diagonal(true).directions().len(), 4);
        assert!(config.validate().is_ok());
    }

    // Tests zero and oversized dimensions are rejected
    // Verified by only checking width
    #[test]
    fn test_config_rejects_bad_dimensions() {
        for (width, height) in [(0, 5), (5, 0), (20_000, 5)] {
            match GeneratorConfig::new(width, height).validate() {
                Err(WordGridError::InvalidDimensions { .. }) => {}
                other => unreachable!("expected InvalidDimensions, got {other:?}"),
            }
        }
    }

    // Tests probabilities outside [0, 1] are rejected
    // Verified by clamping instead of rejecting
    #[test]
    fn test_config_rejects_bad_probability() {
        for probability in [-0.1, 1.5, f64::NAN] {
            let config = GeneratorConfig::new(5, 5).with_intersection_probability(probability);
            match config.validate() {
                Err(WordGridError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, "intersection_probability");
                }
                other => unreachable!("expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests words must be non-empty uppercase A-Z
    // Verified by accepting lowercase letters
    #[test]
    fn test_generate_rejects_invalid_words() {
        for word in ["", "cat", "C-T", "ÉTÉ"] {
            match generate(5, 5, &["DOG", word], false, false, 1) {
                Err(WordGridError::InvalidWord { word: rejected, .. }) => {
                    assert_eq!(rejected, word);
                }
                other => unreachable!("expected InvalidWord for {word:?}, got {other:?}"),
            }
        }
    }

    // Tests an exhausted budget drops words without failing the run
    // Verified by aborting generation on the first dropped word
    #[test]
    fn test_zero_budget_drops_everything() {
        let config = GeneratorConfig::new(6, 6)
            .with_max_random_attempts(0)
            .with_intersection_probability(0.0);
        let mut generator = WordSearchGenerator::new(config, 4);

        let outcome = generator.generate(&["ONE", "TWO"]);

        assert!(outcome.as_ref().is_ok_and(|o| o.placed.is_empty()));
        assert_eq!(
            outcome.map(|o| o.dropped).unwrap_or_default(),
            vec!["ONE".to_string(), "TWO".to_string()]
        );
    }

    // Tests forced crossings make the second word share a cell with the first
    // Verified by skipping the intersection path
    #[test]
    fn test_forced_intersection_shares_a_cell() {
        for seed in 0..20 {
            let config = GeneratorConfig::new(2, 2).with_intersection_probability(1.0);
            let mut generator = WordSearchGenerator::new(config, seed);

            let Ok(outcome) = generator.generate(&["AB", "BA"]) else {
                unreachable!("generation failed for seed {seed}");
            };

            assert!(outcome.is_complete(), "seed {seed} dropped {:?}", outcome.dropped);
            let (Some(first), Some(second)) =
                (outcome.placement_of("AB"), outcome.placement_of("BA"))
            else {
                unreachable!("missing placement for seed {seed}");
            };

            let shared = first
                .cells()
                .filter(|&(x, y, _)| second.cells().any(|(sx, sy, _)| (sx, sy) == (x, y)))
                .count();
            assert_eq!(shared, 1, "seed {seed}");
            assert_ne!(first.direction(), second.direction());
        }
    }

    // Tests words that fit nowhere are dropped and leave no trace
    // Verified by placing words partially before giving up
    #[test]
    fn test_oversized_word_is_dropped() {
        let Ok(outcome) = generate(3, 3, &["ABCD"], true, false, 8) else {
            unreachable!("generation failed");
        };

        assert_eq!(outcome.dropped, vec!["ABCD".to_string()]);
        assert!(outcome.placed.is_empty());
        assert_eq!(outcome.grid.empty_count(), 9);
    }

    // Tests the generator reports the configuration it was built with
    // Verified by returning a default configuration
    #[test]
    fn test_generator_exposes_config() {
        let config = GeneratorConfig::new(7, 4).with_fill(true);
        let generator = WordSearchGenerator::new(config, 0);

        assert_eq!(generator.config(), &config);
    }

    // Tests successive runs on one generator keep drawing from the same stream
    // Verified by reseeding on every run
    #[test]
    fn test_generator_reuse_advances_randomness() {
        let config = GeneratorConfig::new(12, 12).with_fill(true);
        let mut generator = WordSearchGenerator::new(config, 2);

        let first = generator.generate(&["HELLO"]).map(|o| o.grid);
        let second = generator.generate(&["HELLO"]).map(|o| o.grid);

        assert!(first.is_ok() && second.is_ok());
        assert_ne!(first.ok(), second.ok());
    }

    // Tests placements only use the straight directions when diagonals are off
    // Verified by always offering all four directions
    #[test]
    fn test_straight_only_placements() {
        let Ok(outcome) = generate(
            9,
            9,
            &["APPLE", "PEAR", "PLUM", "GRAPE", "LEMON"],
            false,
            false,
            31,
        ) else {
            unreachable!("generation failed");
        };

        assert!(
            outcome
                .placed
                .iter()
                .all(|p| matches!(p.direction(), Direction::Horizontal | Direction::Vertical))
        );
    }
}
