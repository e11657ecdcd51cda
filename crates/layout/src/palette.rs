use ratatui::style::{Color, Style};

/// Gruvbox accents used when the terminal supports 24-bit color.
const GRUVBOX: [Color; 7] = [
	Color::Rgb(204, 36, 29),
	Color::Rgb(214, 93, 14),
	Color::Rgb(215, 153, 33),
	Color::Rgb(152, 151, 26),
	Color::Rgb(104, 157, 106),
	Color::Rgb(69, 133, 136),
	Color::Rgb(177, 98, 134),
];

/// Basic ANSI colors for terminals without 24-bit support.
const FALLBACK: [Color; 6] = [
	Color::Red,
	Color::Yellow,
	Color::Green,
	Color::Cyan,
	Color::Blue,
	Color::Magenta,
];

/// Cyclic color assignment for connector arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	colors: &'static [Color],
}

impl Palette {
	pub fn new(truecolor: bool) -> Self {
		let colors: &'static [Color] = if truecolor { &GRUVBOX } else { &FALLBACK };
		Self { colors }
	}

	/// Style for the contraction at sequence `index`.
	pub fn style_for(&self, index: usize) -> Style {
		Style::new().fg(self.colors[index % self.colors.len()])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colors_cycle_by_sequence_index() {
		let palette = Palette::new(true);
		assert_eq!(palette.style_for(0), palette.style_for(GRUVBOX.len()));
		assert_ne!(palette.style_for(0), palette.style_for(1));
		assert_eq!(Palette::new(false).style_for(6).fg, Some(Color::Red));
	}
}
