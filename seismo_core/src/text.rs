//! # Plaintext Boxes
//!
//! Utility for wrapping text in decorated plaintext "boxes", e.g. C-style
//! comment banners for generated source files. Pure formatting, no domain
//! logic.
//!
//! A box is laid out so:
//!
//! ```text
//! |<------------------ width ------------------>|
//! <first><------------ rule -------------><right>
//! <left><lpad><------- text -------><rpad><right>
//! <left><------------- rule -------------><last>
//! ```

/// Configurable box drawer.
///
/// `first` and `last` are alternate rails for the top-left and bottom-right
/// corners, e.g. for multiline-comment style boxes; they default to `left`
/// and `right`.
#[derive(Debug, Clone)]
pub struct Boxer {
    pub left: String,
    pub right: String,
    pub rule: String,
    pub lpad: String,
    pub rpad: String,
    pub first: String,
    pub last: String,
    /// Default total box width in characters
    pub width: usize,
}

impl Boxer {
    /// Create a Boxer with single-space padding, matching rails, and a
    /// default width of 80.
    pub fn new(left: &str, right: &str, rule: &str) -> Self {
        Boxer {
            left: left.to_string(),
            right: right.to_string(),
            rule: rule.to_string(),
            lpad: " ".to_string(),
            rpad: " ".to_string(),
            first: left.to_string(),
            last: right.to_string(),
            width: 80,
        }
    }

    /// Alternate top-left and bottom-right rails
    pub fn with_rails(mut self, first: &str, last: &str) -> Self {
        self.first = first.to_string();
        self.last = last.to_string();
        self
    }

    /// Padding between the rails and the text
    pub fn with_pad(mut self, lpad: &str, rpad: &str) -> Self {
        self.lpad = lpad.to_string();
        self.rpad = rpad.to_string();
        self
    }

    /// Default total box width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Available width in characters for text inside the box.
    pub fn text_width(&self, width: Option<usize>) -> usize {
        let width = width.unwrap_or(self.width);
        width.saturating_sub(
            chars(&self.left) + chars(&self.right) + chars(&self.lpad) + chars(&self.rpad),
        )
    }

    /// Box some text, returned as a joined string.
    pub fn box_text(&self, text: &str, width: Option<usize>, wrap: bool) -> String {
        self.box_lines(text, width, wrap).join("\n")
    }

    /// Box some text, returned as a list of lines.
    ///
    /// With `wrap`, long input lines are word-wrapped to the text width;
    /// without it they are left as-is (creating a spiky box) and a warning
    /// is logged.
    pub fn box_lines(&self, text: &str, width: Option<usize>, wrap: bool) -> Vec<String> {
        let width = width.unwrap_or(self.width);
        let text_width = self.text_width(Some(width));

        let top_fill = width.saturating_sub(chars(&self.first) + chars(&self.right));
        let bottom_fill = width.saturating_sub(chars(&self.left) + chars(&self.last));

        let (top_rule, bottom_rule) = if self.rule.is_empty() {
            (self.first.clone(), self.last.clone())
        } else {
            (
                format!("{}{}{}", self.first, fill(&self.rule, top_fill), self.right),
                format!("{}{}{}", self.left, fill(&self.rule, bottom_fill), self.last),
            )
        };

        let mut lines = vec![top_rule];
        for (i, line) in text.lines().enumerate() {
            let wrapped = if wrap && chars(line) > text_width {
                wrap_line(line, text_width)
            } else {
                if chars(line) > text_width {
                    log::warn!("box: line {i} exceeds box dimensions");
                }
                vec![line.to_string()]
            };
            for wline in wrapped {
                lines.push(format!(
                    "{}{}{:<text_width$}{}{}",
                    self.left, self.lpad, wline, self.rpad, self.right
                ));
            }
        }
        lines.push(bottom_rule);
        lines
    }
}

/// Repeat `rule` to exactly `width` characters, truncating the final
/// repetition as needed.
fn fill(rule: &str, width: usize) -> String {
    rule.chars().cycle().take(width).collect()
}

fn chars(s: &str) -> usize {
    s.chars().count()
}

/// Greedy word wrap; words longer than `width` are split hard.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word;
        loop {
            let needed = if current.is_empty() {
                chars(word)
            } else {
                chars(&current) + 1 + chars(word)
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if current.is_empty() {
                // A single word wider than the box: split it hard.
                let split: usize = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
                out.push(word[..split].to_string());
                word = &word[split..];
                if word.is_empty() {
                    break;
                }
            } else {
                out.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Place text in a C-style multiline comment box.
///
/// ```rust
/// use seismo_core::text::cbox;
///
/// let expected = format!(
///     "/*{stars}* \n * hello world!{pad} * \n *{stars}*/",
///     stars = "*".repeat(36),
///     pad = " ".repeat(22),
/// );
/// assert_eq!(cbox("hello world!", 40, true), expected);
/// ```
pub fn cbox(text: &str, width: usize, wrap: bool) -> String {
    Boxer::new(" *", "* ", "*")
        .with_rails("/*", "*/")
        .box_text(text, Some(width), wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbox_layout() {
        let boxed = cbox("hello world!", 40, true);
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("/*{}* ", "*".repeat(36)));
        assert_eq!(lines[1], format!(" * hello world!{} * ", " ".repeat(22)));
        assert_eq!(lines[2], format!(" *{}*/", "*".repeat(36)));
        assert!(lines.iter().all(|l| l.chars().count() == 40));
    }

    #[test]
    fn test_box_wraps_long_lines() {
        let boxer = Boxer::new("|", "|", "-").with_width(20);
        let lines = boxer.box_lines("aaaa bbbb cccc dddd eeee", None, true);
        // 16 characters of text width, padded out before the right rail
        assert_eq!(lines[1], "| aaaa bbbb cccc   |");
        assert_eq!(lines[2], "| dddd eeee        |");
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_box_no_wrap_leaves_spiky_lines() {
        let boxer = Boxer::new("|", "|", "-").with_width(10);
        let lines = boxer.box_lines("a line much longer than the box", None, false);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].chars().count() > 10);
    }

    #[test]
    fn test_multiline_input_keeps_line_breaks() {
        let boxer = Boxer::new("#", "#", "=");
        let lines = boxer.box_lines("one\ntwo", None, true);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("one"));
        assert!(lines[2].contains("two"));
    }

    #[test]
    fn test_multichar_rule_is_truncated_to_width() {
        let boxer = Boxer::new("<", ">", "=-").with_width(12);
        let lines = boxer.box_lines("hi", None, true);
        // 10 characters of rule between the rails
        assert_eq!(lines[0], "<=-=-=-=-=->");
    }

    #[test]
    fn test_empty_rule_uses_rails_alone() {
        let boxer = Boxer::new("|", "|", "").with_width(10);
        let lines = boxer.box_lines("hi", None, true);
        assert_eq!(lines[0], "|");
        assert_eq!(lines[2], "|");
    }

    #[test]
    fn test_hard_split_of_overlong_word() {
        let wrapped = wrap_line("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_text_width_accounts_for_rails_and_pads() {
        let boxer = Boxer::new(" *", "* ", "*");
        // 80 - 2 - 2 - 1 - 1
        assert_eq!(boxer.text_width(None), 74);
    }
}
