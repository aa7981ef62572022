use crate::font::FontMetrics;
use crate::units::Px;

/// A single laid-out line of text with its measured dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub width: Px,
    pub height: Px,
}

impl Line {
    fn measured<M: FontMetrics>(text: String, metrics: &M, size: Px) -> Line {
        let width = metrics.text_width(&text, size);
        let height = metrics.line_height(size);
        Line {
            text,
            width,
            height,
        }
    }
}

/// An ordered stack of [Line]s together with its overall dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<Line>,
    /// The width of the widest line
    pub width: Px,
    /// The sum of all line heights plus inter-line spacing
    pub height: Px,
    /// The gap inserted between consecutive lines
    pub spacing: Px,
}

/// Greedily wrap `text` into lines no wider than `max_width` pixels.
///
/// Words are accumulated onto a candidate line and the candidate is
/// re-measured after each word; when it overflows, the line is closed
/// without the last word and that word starts the next line. Word
/// boundaries are never broken: a single word that is wider than
/// `max_width` on its own is kept unsplit on its own line and the overflow
/// is accepted rather than treated as an error.
///
/// Empty (or all-whitespace) input yields a single empty line of zero
/// size, so downstream layout degenerates gracefully instead of failing.
pub fn wrap<M: FontMetrics>(text: &str, metrics: &M, size: Px, max_width: Px) -> Vec<Line> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![Line {
            text: String::new(),
            width: Px::ZERO,
            height: Px::ZERO,
        }];
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in words {
        current.push(word);
        let candidate = current.join(" ");
        if metrics.text_width(&candidate, size) > max_width && current.len() > 1 {
            let overflow = current.pop().expect("candidate has more than one word");
            lines.push(Line::measured(current.join(" "), metrics, size));
            current = vec![overflow];
        }
    }
    lines.push(Line::measured(current.join(" "), metrics, size));

    lines
}

/// Stack `lines` into a [TextBlock]: block width is the widest line, block
/// height is the sum of line heights plus `spacing` between each pair of
/// consecutive lines.
pub fn layout_block(lines: Vec<Line>, spacing: Px) -> TextBlock {
    let width = lines
        .iter()
        .fold(Px::ZERO, |acc, line| acc.max(line.width));
    let height = lines.iter().map(|line| line.height).sum::<Px>()
        + spacing * (lines.len().saturating_sub(1)) as f32;

    TextBlock {
        lines,
        width,
        height,
        spacing,
    }
}
