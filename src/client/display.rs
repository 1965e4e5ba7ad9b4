/// Which of the mutually exclusive result-area views applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing typed yet.
    EmptyPrompt,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed.
    Error,
    /// The fetch succeeded but the catalogue had zero hits.
    NoUpstreamResults,
    /// Hits exist, but none are on a selected service.
    NoMatchingService,
    /// At least one matching result.
    Results,
}

/// Top-level controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Preference storage has not been read yet.
    Hydrating,
    /// No services selected; search is unavailable.
    Onboarding,
    Ready(DisplayState),
}

/// Derives the result-area view from primitive flags.
///
/// The checks run in a fixed order so the overlapping conditions stay
/// unambiguous: empty prompt, then loading, then error, then zero upstream
/// hits, then zero matches.
pub fn display_state(
    has_query: bool,
    is_loading: bool,
    has_error: bool,
    total_unfiltered: usize,
    filtered_count: usize,
) -> DisplayState {
    if !has_query {
        DisplayState::EmptyPrompt
    } else if is_loading {
        DisplayState::Loading
    } else if has_error {
        DisplayState::Error
    } else if total_unfiltered == 0 {
        DisplayState::NoUpstreamResults
    } else if filtered_count == 0 {
        DisplayState::NoMatchingService
    } else {
        DisplayState::Results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query_wins_over_everything() {
        assert_eq!(
            display_state(false, true, true, 5, 5),
            DisplayState::EmptyPrompt
        );
    }

    #[test]
    fn test_loading_wins_over_error_and_counts() {
        assert_eq!(display_state(true, true, true, 0, 0), DisplayState::Loading);
    }

    #[test]
    fn test_error_wins_over_counts() {
        assert_eq!(display_state(true, false, true, 3, 1), DisplayState::Error);
    }

    #[test]
    fn test_zero_upstream_distinct_from_zero_matched() {
        assert_eq!(
            display_state(true, false, false, 0, 0),
            DisplayState::NoUpstreamResults
        );
        assert_eq!(
            display_state(true, false, false, 7, 0),
            DisplayState::NoMatchingService
        );
    }

    #[test]
    fn test_results_when_matches_exist() {
        assert_eq!(
            display_state(true, false, false, 7, 2),
            DisplayState::Results
        );
    }
}
