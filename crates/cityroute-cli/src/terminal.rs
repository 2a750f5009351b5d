//! ANSI styling for prompts, headings and query results.

/// Escape sequences used by the CLI.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Interactive prompts.
    pub const GRAY: &str = "\x1b[90m";
    /// Section headings such as the graph layout.
    pub const CYAN: &str = "\x1b[36m";
    /// Answered queries.
    pub const GREEN: &str = "\x1b[32m";
    /// Rejected queries.
    pub const RED: &str = "\x1b[31m";
}

/// Escape sequences resolved for the current run; all empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            gray: "",
            cyan: "",
            green: "",
            red: "",
        }
    }

    /// Colored unless the environment asks otherwise (see [`supports_color`]).
    #[must_use]
    pub fn detect() -> Self {
        Self::for_terminal(supports_color())
    }

    fn for_terminal(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Whether ANSI colors should be emitted.
///
/// Any `NO_COLOR` value (https://no-color.org/) or `TERM=dumb` turns them off.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
