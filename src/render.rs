//! Fixed-width textual rendering of a puzzle state.
//!
//! One row of `|c|` cells per capacity slot, top row first, with blank
//! openings above the liquid, over a footer of 1-based tube numbers. Cell
//! width adapts to the widest color number in the puzzle.

use crate::state::PuzzleState;

/// Renders a state as a multi-line board, without a trailing newline.
pub fn render(state: &PuzzleState) -> String {
    let width = state
        .tubes()
        .iter()
        .flatten()
        .map(|color| color.to_string().len())
        .max()
        .unwrap_or(1);

    let mut lines = Vec::new();

    for slot in (0..state.capacity()).rev() {
        let mut line = String::new();
        for (i, tube) in state.tubes().iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            match tube.get(slot) {
                Some(color) => line.push_str(&format!("|{color:<width$}|")),
                None => line.push_str(&format!("|{:width$}|", "")),
            }
        }
        lines.push(line);
    }

    let mut footer = String::new();
    for i in 0..state.tube_count() {
        if i > 0 {
            footer.push(' ');
        }
        footer.push_str(&format!(" {:<width$} ", i + 1));
    }
    lines.push(footer.trim_end().to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PuzzleState;

    fn state(tubes: Vec<Vec<u8>>) -> PuzzleState {
        PuzzleState::new(tubes).expect("test puzzle should be valid")
    }

    #[test]
    fn test_render_small_puzzle() {
        // [[], [0, 1, 1], [2, 0, 1], [0, 2, 2]] in top-to-bottom notation
        let state = state(vec![vec![], vec![1, 1, 0], vec![1, 0, 2], vec![2, 2, 0]]);
        insta::assert_snapshot!("render_small_puzzle", render(&state));
    }

    #[test]
    fn test_render_rows_share_a_width() {
        // two-digit color forces wider cells everywhere
        let state = state(vec![vec![9, 10], vec![10, 9], vec![]]);
        let rendered = render(&state);
        let lines: Vec<&str> = rendered.lines().collect();
        // capacity rows plus the footer
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[0].contains("|9 |"));
    }

    #[test]
    fn test_render_leaves_openings_blank() {
        let state = state(vec![vec![1, 1], vec![2], vec![2]]);
        let rendered = render(&state);
        let lines: Vec<&str> = rendered.lines().collect();
        // the half-full tubes are blank in the top row
        assert_eq!(lines[0], "|1| | | | |");
        assert_eq!(lines[1], "|1| |2| |2|");
    }
}
