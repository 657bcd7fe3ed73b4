//! Small presentational pieces shared by templates.

use askama::Template;

/// Animated placeholder shown while something loads (e.g., the GitHub
/// stats cards, which are fetched by the browser).
#[derive(Debug, Clone, Template)]
#[template(path = "components/loading_pulse.html")]
pub struct LoadingPulse {
    /// Number of placeholder bars.
    pub lines: usize,
    /// Extra CSS classes on the wrapper.
    pub class: &'static str,
}

impl Default for LoadingPulse {
    fn default() -> Self {
        Self { lines: 3, class: "" }
    }
}

impl LoadingPulse {
    #[must_use]
    pub const fn new(lines: usize, class: &'static str) -> Self {
        Self { lines, class }
    }

    /// Width of each bar; the last one is shorter.
    #[must_use]
    pub fn widths(&self) -> Vec<&'static str> {
        (0..self.lines)
            .map(|i| if i + 1 == self.lines { "w-2/3" } else { "w-full" })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_requested_bars() {
        let html = LoadingPulse::new(2, "card").render().unwrap();
        assert_eq!(html.matches("pulse-bar").count(), 2);
        assert!(html.contains("card"));
        assert!(html.contains("aria-busy=\"true\""));
    }

    #[test]
    fn test_last_bar_is_shorter() {
        assert_eq!(LoadingPulse::new(3, "").widths(), vec!["w-full", "w-full", "w-2/3"]);
        assert!(LoadingPulse::new(0, "").widths().is_empty());
    }
}
