//! Parameter tokens of a G-code command line.
//!
//! Command lines are tokenized on single spaces; a parameter is a token
//! whose first character is the parameter letter and whose remainder is an
//! integer. A remainder that fails to parse is skipped, never an error.

/// First integer value carried by a `letter` parameter, if any.
pub fn int_param(line: &str, letter: char) -> Option<i64> {
    line.split(' ')
        .filter_map(|token| token.strip_prefix(letter))
        .find_map(|rest| rest.parse().ok())
}

/// Does the line carry a `letter` parameter strictly greater than zero?
pub fn has_positive_param(line: &str, letter: char) -> bool {
    line.split(' ')
        .filter_map(|token| token.strip_prefix(letter))
        .filter_map(|rest| rest.parse::<i64>().ok())
        .any(|value| value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_param() {
        assert_eq!(int_param("M150 P255", 'P'), Some(255));
        assert_eq!(int_param("M150 R0 U0 B0 P1", 'P'), Some(1));
        assert_eq!(int_param("M150", 'P'), None);
        assert_eq!(int_param("M117 hello P", 'P'), None);
    }

    #[test]
    fn test_malformed_values_are_skipped() {
        assert_eq!(int_param("M150 PX", 'P'), None);
        assert_eq!(int_param("M150 PX P5", 'P'), Some(5));
        assert!(!has_positive_param("M150 PX", 'P'));
        assert!(has_positive_param("M150 PX P5", 'P'));
    }

    #[test]
    fn test_positive_param() {
        assert!(has_positive_param("M150 P1", 'P'));
        assert!(!has_positive_param("M150 P0", 'P'));
        assert!(!has_positive_param("M150 P-3", 'P'));
        // a later token may still qualify
        assert!(has_positive_param("M150 P0 P5", 'P'));
    }
}
