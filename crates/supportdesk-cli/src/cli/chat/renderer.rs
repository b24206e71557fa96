//! Terminal markdown rendering for support replies.
//!
//! Prose goes through `termimad`; fenced code blocks are highlighted with
//! `syntect`.

use crossterm::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;
use termimad::MadSkin;

const CODE_THEME: &str = "base16-ocean.dark";

pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ChatRenderer {
    /// Create a renderer whose bold text and headers use `accent`.
    pub fn new(accent: Color) -> Self {
        let mut skin = MadSkin::default_dark();
        let tc = to_termimad_color(accent);
        skin.bold.set_fg(tc);
        skin.headers[0].set_fg(tc);
        skin.headers[1].set_fg(tc);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render a complete markdown reply.
    pub fn render(&self, markdown: &str) -> String {
        let mut output = String::new();
        let mut code: Option<(String, String)> = None;

        for line in markdown.lines() {
            if line.trim_start().starts_with("```") {
                match code.take() {
                    None => {
                        let lang = line.trim().trim_start_matches('`').trim().to_string();
                        code = Some((lang, String::new()));
                    }
                    Some((lang, buf)) => output.push_str(&self.highlight_code(&buf, &lang)),
                }
            } else if let Some((_, buf)) = code.as_mut() {
                buf.push_str(line);
                buf.push('\n');
            } else {
                output.push_str(&self.skin.term_text(line).to_string());
            }
        }

        // Unclosed fence: still show what was collected.
        if let Some((lang, buf)) = code {
            if !buf.is_empty() {
                output.push_str(&self.highlight_code(&buf, &lang));
            }
        }

        output
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = if lang.is_empty() {
            self.syntax_set.find_syntax_plain_text()
        } else {
            self.syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
        };

        let mut output = String::new();
        let Some(theme) = self.theme_set.themes.get(CODE_THEME) else {
            for line in code.lines() {
                output.push_str(&format!("  {line}\n"));
            }
            return output;
        };

        let mut h = HighlightLines::new(syntax, theme);
        for line in code.lines() {
            let ranges: Vec<(Style, &str)> = h
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            let escaped = as_24_bit_terminal_escaped(&ranges[..], false);
            output.push_str(&format!("  {escaped}\x1b[0m\n"));
        }
        output
    }
}

/// Dim `| tokens · seconds · model` line printed after a reply.
pub fn stats_footer(tokens: u32, response_ms: u64, model: &str) -> String {
    let seconds = response_ms as f64 / 1000.0;
    format!(
        "  {} {} tokens {} {} {} {}",
        console::style("|").dim(),
        console::style(tokens).dim(),
        console::style("\u{00b7}").dim(),
        console::style(format!("{seconds:.1}s")).dim(),
        console::style("\u{00b7}").dim(),
        console::style(model).dim(),
    )
}

fn to_termimad_color(color: Color) -> termimad::crossterm::style::Color {
    use termimad::crossterm::style::Color as Tc;
    match color {
        Color::Cyan => Tc::Cyan,
        Color::Green => Tc::Green,
        Color::Yellow => Tc::Yellow,
        Color::Magenta => Tc::Magenta,
        Color::Blue => Tc::Blue,
        Color::Rgb { r, g, b } => Tc::Rgb { r, g, b },
        _ => Tc::White,
    }
}
