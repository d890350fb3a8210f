//! Static display data for the hero: the background role wall and the four
//! headline lines.
//!
//! Everything here is `const` and lives for the whole program.

/// Words cycled by the background role wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleWord {
    Designer,
    Problem,
    Solver,
    Tech,
    Generalist,
    Webflow,
    Developer,
    Freelance,
}

impl RoleWord {
    /// Every word the wall is allowed to show.
    pub const ALL: [RoleWord; 8] = [
        RoleWord::Designer,
        RoleWord::Problem,
        RoleWord::Solver,
        RoleWord::Tech,
        RoleWord::Generalist,
        RoleWord::Webflow,
        RoleWord::Developer,
        RoleWord::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleWord::Designer => "DESIGNER",
            RoleWord::Problem => "PROBLEM",
            RoleWord::Solver => "SOLVER",
            RoleWord::Tech => "TECH",
            RoleWord::Generalist => "GENERALIST",
            RoleWord::Webflow => "WEBFLOW",
            RoleWord::Developer => "DEVELOPER",
            RoleWord::Freelance => "FREELANCE",
        }
    }
}

/// Tailwind text color classes used by the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    White,
    Gray500,
    Amber400,
    Amber500,
    Yellow400,
    Orange500,
    Red500,
    Pink400,
    Purple400,
    Purple500,
    Violet400,
    Blue400,
    Blue500,
}

impl ColorToken {
    /// CSS class for this token.
    pub fn class(&self) -> &'static str {
        match self {
            ColorToken::White => "text-white",
            ColorToken::Gray500 => "text-gray-500",
            ColorToken::Amber400 => "text-amber-400",
            ColorToken::Amber500 => "text-amber-500",
            ColorToken::Yellow400 => "text-yellow-400",
            ColorToken::Orange500 => "text-orange-500",
            ColorToken::Red500 => "text-red-500",
            ColorToken::Pink400 => "text-pink-400",
            ColorToken::Purple400 => "text-purple-400",
            ColorToken::Purple500 => "text-purple-500",
            ColorToken::Violet400 => "text-violet-400",
            ColorToken::Blue400 => "text-blue-400",
            ColorToken::Blue500 => "text-blue-500",
        }
    }
}

/// One fragment of the background wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub word: RoleWord,
    pub color: ColorToken,
}

impl Role {
    const fn new(word: RoleWord, color: ColorToken) -> Self {
        Self { word, color }
    }

    /// Rendered text, always terminated by a period.
    pub fn label(&self) -> String {
        format!("{}.", self.word.as_str())
    }
}

use ColorToken as C;
use RoleWord as W;

/// The background wall, in render order.
pub const ROLES: [Role; 20] = [
    Role::new(W::Designer, C::Amber400),
    Role::new(W::Problem, C::Gray500),
    Role::new(W::Solver, C::Purple400),
    Role::new(W::Tech, C::Gray500),
    Role::new(W::Generalist, C::Blue400),
    Role::new(W::Webflow, C::Gray500),
    Role::new(W::Developer, C::Orange500),
    Role::new(W::Freelance, C::Gray500),
    Role::new(W::Designer, C::Yellow400),
    Role::new(W::Problem, C::Gray500),
    Role::new(W::Solver, C::Pink400),
    Role::new(W::Tech, C::Gray500),
    Role::new(W::Generalist, C::Blue500),
    Role::new(W::Webflow, C::Gray500),
    Role::new(W::Developer, C::Red500),
    Role::new(W::Freelance, C::Gray500),
    Role::new(W::Designer, C::Amber500),
    Role::new(W::Problem, C::Gray500),
    Role::new(W::Solver, C::Violet400),
    Role::new(W::Tech, C::Gray500),
];

/// Heading level of a headline line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

/// A headline line: a colored accent word followed by a white tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub level: HeadingLevel,
    pub accent: &'static str,
    pub accent_color: ColorToken,
    pub tail: &'static str,
    pub tail_color: ColorToken,
}

pub const HEADLINES: [Headline; 4] = [
    Headline {
        level: HeadingLevel::H1,
        accent: "WEBFLOW",
        accent_color: C::White,
        tail: " DEVELOPER.",
        tail_color: C::Orange500,
    },
    Headline {
        level: HeadingLevel::H2,
        accent: "FREELANCE",
        accent_color: C::Yellow400,
        tail: " DESIGNER.",
        tail_color: C::White,
    },
    Headline {
        level: HeadingLevel::H3,
        accent: "PROBLEM",
        accent_color: C::Purple500,
        tail: " SOLVER.",
        tail_color: C::White,
    },
    Headline {
        level: HeadingLevel::H4,
        accent: "TECH",
        accent_color: C::Blue500,
        tail: " GENERALIST.",
        tail_color: C::White,
    },
];
