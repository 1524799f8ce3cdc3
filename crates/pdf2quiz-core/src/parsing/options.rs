use crate::model::{OptionLetter, OptionMap, MAX_OPTIONS};
use regex::Regex;
use std::sync::LazyLock;

/// Leading "B." or "B)" on an option line.
static OPTION_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-G][.)]\s*").expect("valid option prefix regex"));

/// Split the text before the answer key into the question prompt and its options.
///
/// Option letters are assigned by position. Literal letters in the text are
/// stripped and ignored because extraction frequently loses or misplaces them.
pub fn extract_prompt_and_options(before: &str) -> (String, OptionMap) {
    let lines: Vec<&str> = before
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let boundary = find_prompt_end(&lines);
    let prompt = collapse_whitespace(&lines[..boundary].join(" "));
    let options = build_options(&lines[boundary..]);

    (prompt, options)
}

/// Index of the first option line.
///
/// The prompt ends after the last line ending in '?' or ':'. Without such a
/// line the trailing lines (at most seven) become options, keeping at least
/// one line for the prompt.
fn find_prompt_end(lines: &[&str]) -> usize {
    if let Some(i) = lines
        .iter()
        .rposition(|l| l.ends_with('?') || l.ends_with(':'))
    {
        return i + 1;
    }

    if lines.is_empty() {
        return 0;
    }
    let option_count = MAX_OPTIONS.min(lines.len() - 1);
    (lines.len() - option_count).max(1)
}

fn build_options(lines: &[&str]) -> OptionMap {
    lines
        .iter()
        .map(|line| OPTION_PREFIX_REGEX.replace(line, "").trim().to_string())
        .filter(|text| !text.is_empty())
        .take(MAX_OPTIONS)
        .enumerate()
        .filter_map(|(i, text)| OptionLetter::from_index(i).map(|letter| (letter, text)))
        .collect()
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use OptionLetter::*;

    #[test]
    fn test_prompt_ends_at_question_mark() {
        let (prompt, options) = extract_prompt_and_options(
            "Which tool performs\npassive OS fingerprinting?\nA. nmap\nB. tcpdump\nC. tracert\nD. ping",
        );
        assert_eq!(prompt, "Which tool performs passive OS fingerprinting?");
        assert_eq!(options.len(), 4);
        assert_eq!(options[&A], "nmap");
        assert_eq!(options[&D], "ping");
    }

    #[test]
    fn test_last_colon_line_wins() {
        let (prompt, options) = extract_prompt_and_options(
            "Consider the following:\nnet use \\\\target\\ipc$\nWhat does it do?\nnull session\nzone transfer",
        );
        assert_eq!(
            prompt,
            "Consider the following: net use \\\\target\\ipc$ What does it do?"
        );
        assert_eq!(options.len(), 2);
        assert_eq!(options[&B], "zone transfer");
    }

    #[test]
    fn test_letters_assigned_by_position_not_marker() {
        let (_, options) =
            extract_prompt_and_options("Pick one?\nC. first\nnot marked\nA) third");
        assert_eq!(options[&A], "first");
        assert_eq!(options[&B], "not marked");
        assert_eq!(options[&C], "third");
    }

    #[test]
    fn test_marker_only_lines_leave_no_gap() {
        let (_, options) = extract_prompt_and_options("Pick one?\nA.\nfirst\nB)\nsecond");
        let keys: Vec<OptionLetter> = options.keys().copied().collect();
        assert_eq!(keys, vec![A, B]);
        assert_eq!(options[&B], "second");
    }

    #[test]
    fn test_at_most_seven_options() {
        let before = "Pick?\n1\n2\n3\n4\n5\n6\n7\n8\n9";
        let (_, options) = extract_prompt_and_options(before);
        assert_eq!(options.len(), 7);
        assert_eq!(options[&G], "7");
    }

    #[test]
    fn test_fallback_without_terminator() {
        let (prompt, options) =
            extract_prompt_and_options("Select the best option\nalpha\nbeta\ngamma");
        assert_eq!(prompt, "Select the best option");
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_fallback_caps_option_count() {
        let before = "line one\nline two\nl3\nl4\nl5\nl6\nl7\nl8\nl9";
        let (prompt, options) = extract_prompt_and_options(before);
        assert_eq!(prompt, "line one line two");
        assert_eq!(options.len(), 7);
        assert_eq!(options[&A], "l3");
    }

    #[test]
    fn test_single_line_yields_no_options() {
        let (prompt, options) = extract_prompt_and_options("just a prompt");
        assert_eq!(prompt, "just a prompt");
        assert!(options.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let (prompt, options) = extract_prompt_and_options("   \n ");
        assert_eq!(prompt, "");
        assert!(options.is_empty());
    }

    #[test]
    fn test_prompt_whitespace_collapsed() {
        let (prompt, _) = extract_prompt_and_options("Which   port\tdoes NTP use?\n123\n80");
        assert_eq!(prompt, "Which port does NTP use?");
    }
}
