/// Fallback for languages the table does not know.
pub const DEFAULT_COLOR: &str = "#8b949e";

/// Process-wide display colors, matching GitHub's linguist palette. Read
/// concurrently by every request; never mutated.
static LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Assembly", "#6E4C13"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("Clojure", "#db5855"),
    ("CoffeeScript", "#244776"),
    ("Crystal", "#000100"),
    ("CSS", "#563d7c"),
    ("Dart", "#00B4AB"),
    ("Dockerfile", "#384d54"),
    ("Elixir", "#6e4a7e"),
    ("Emacs Lisp", "#c065db"),
    ("Erlang", "#B83998"),
    ("F#", "#b845fc"),
    ("Go", "#00ADD8"),
    ("Groovy", "#4298b8"),
    ("Haskell", "#5e5086"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Julia", "#a270ba"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("Kotlin", "#A97BFF"),
    ("Lua", "#000080"),
    ("Makefile", "#427819"),
    ("MATLAB", "#e16737"),
    ("Nim", "#ffc200"),
    ("Nix", "#7e7eff"),
    ("Objective-C", "#438eff"),
    ("OCaml", "#ef7a08"),
    ("Perl", "#0298c3"),
    ("PHP", "#4F5D95"),
    ("PowerShell", "#012456"),
    ("Python", "#3572A5"),
    ("R", "#198CE7"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Scala", "#c22d40"),
    ("SCSS", "#c6538c"),
    ("Shell", "#89e051"),
    ("Solidity", "#AA6746"),
    ("Svelte", "#ff3e00"),
    ("Swift", "#F05138"),
    ("TeX", "#3D6117"),
    ("TypeScript", "#3178c6"),
    ("Vim Script", "#199f4b"),
    ("Vue", "#41b883"),
    ("Zig", "#ec915c"),
];

pub fn color_for(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
