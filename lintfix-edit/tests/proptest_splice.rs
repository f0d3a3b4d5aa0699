//! Property-based tests for the splice primitive.
//!
//! Invariants:
//! - The returned delta always equals the actual change in line length.
//! - Text outside the spliced range is preserved.
//! - Precondition failures leave the line untouched.

use lintfix_edit::splice;
use proptest::prelude::*;

proptest! {
    #[test]
    fn delta_matches_length_change(
        line in "[ -~]{0,40}",
        a in 0usize..=40,
        b in 0usize..=40,
        replacement in "[ -~]{0,8}",
    ) {
        let start = a.min(b).min(line.len());
        let end = a.max(b).min(line.len());

        let mut spliced = line.clone();
        let delta = splice(&mut spliced, start..end, &replacement).unwrap();

        prop_assert_eq!(spliced.len() as isize - line.len() as isize, delta);
        prop_assert_eq!(&spliced[..start], &line[..start]);
        prop_assert_eq!(&spliced[start..start + replacement.len()], replacement.as_str());
        prop_assert_eq!(&spliced[start + replacement.len()..], &line[end..]);
    }

    #[test]
    fn out_of_bounds_leaves_line_untouched(
        line in "[ -~]{0,20}",
        past in 1usize..10,
    ) {
        let bad = line.len() + past;
        let mut spliced = line.clone();

        prop_assert!(splice(&mut spliced, bad..bad, "x").is_err());
        prop_assert_eq!(spliced, line);
    }

    #[test]
    fn empty_splice_is_identity(line in "[ -~]{0,40}", at in 0usize..=40) {
        let at = at.min(line.len());
        let mut spliced = line.clone();

        prop_assert_eq!(splice(&mut spliced, at..at, ""), Ok(0));
        prop_assert_eq!(spliced, line);
    }
}
