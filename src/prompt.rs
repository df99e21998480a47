//! Prompt construction for commit message generation
//!
//! This module holds the fixed instructional template and builds the final
//! prompt by embedding the git diff into it.

/// Instructions sent to the model ahead of the diff.
///
/// The wording asks for a plain commit message: a short title, a blank line,
/// then a bulleted summary. Code fences are explicitly forbidden, and the
/// template itself avoids writing the delimiter out so the outgoing prompt
/// never contains one.
pub const PROMPT_TEMPLATE: &str = "\
Write a well-structured git commit message (without markdown or code blocks) for the following diff. The format should be:

*   A short, descriptive title (under 70 characters) on the first line.
*   A blank line.
*   A bulleted list summarizing all changes and their purpose. Each bullet point should be concise and focus on a specific modification.

Aim for a style similar to a normal dev. Do not wrap the output in code fences or include any fence delimiters.";

/// Build the prompt by combining the fixed template and the git diff
///
/// The final prompt structure is:
/// ```text
/// {template}
///
/// {git_diff}
/// ```
///
/// # Arguments
///
/// * `diff` - Git diff content, embedded verbatim
///
/// # Example
///
/// ```
/// use gemini_commit::prompt::{PROMPT_TEMPLATE, build_prompt};
///
/// let prompt = build_prompt("+added line");
/// assert_eq!(prompt, format!("{}\n\n+added line", PROMPT_TEMPLATE));
/// ```
pub fn build_prompt(diff: &str) -> String {
    format!("{}\n\n{}", PROMPT_TEMPLATE, diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_embeds_diff_verbatim() {
        // Arrange - a diff with every character class a diff can carry
        let diff = "diff --git a/file.txt b/file.txt\n+new line\n-old line\n\ttabbed";

        // Act
        let result = build_prompt(diff);

        // Assert - the diff appears unmodified after the template
        assert!(result.starts_with(PROMPT_TEMPLATE));
        assert!(result.ends_with(diff));
    }

    #[test]
    fn test_build_prompt_separator_is_blank_line() {
        // Arrange
        let diff = "+added line";

        // Act
        let result = build_prompt(diff);

        // Assert - template and diff are joined by exactly one blank line
        assert_eq!(result, format!("{}\n\n{}", PROMPT_TEMPLATE, diff));
    }

    #[test]
    fn test_build_prompt_empty_diff() {
        // Arrange - empty working tree produces an empty diff
        let diff = "";

        // Act
        let result = build_prompt(diff);

        // Assert - still the template followed by the separator
        assert_eq!(result, format!("{}\n\n", PROMPT_TEMPLATE));
    }

    #[test]
    fn test_prompt_contains_no_code_fence() {
        // Arrange - a plain diff, so any fence would come from the template
        let diff = "+println!(\"hello\");";

        // Act
        let result = build_prompt(diff);

        // Assert - the tool never adds fence delimiters of its own
        assert!(!result.contains("```"));
    }

    #[test]
    fn test_template_states_title_limit_and_structure() {
        // Assert - the instructions pin the title length limit, the blank
        // separator line, and the bulleted summary
        assert!(PROMPT_TEMPLATE.contains("under 70 characters"));
        assert!(PROMPT_TEMPLATE.contains("A blank line."));
        assert!(PROMPT_TEMPLATE.contains("bulleted list"));
    }

    #[test]
    fn test_build_prompt_unicode_diff() {
        // Arrange - multi-byte characters must pass through untouched
        let diff = "diff --git a/日本語.txt b/日本語.txt\n+こんにちは 🎉";

        // Act
        let result = build_prompt(diff);

        // Assert
        assert!(result.contains("こんにちは 🎉"));
    }
}
