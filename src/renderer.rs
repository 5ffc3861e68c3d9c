//! Rendering system for different output formats

use crate::board::GRID_SIZE;
use crate::session::GameState;

/// Trait for rendering game state to various formats
pub trait Renderer {
    type Output;
    type Error;

    fn render(&self, state: &GameState) -> Result<Self::Output, Self::Error>;
}

/// Text-based renderer for terminals and debugging
pub struct TextRenderer {
    /// Include the moves/episode header
    pub show_header: bool,
    /// Include score and max-tile counters
    pub show_stats: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            show_header: true,
            show_stats: true,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid only, no header or counters
    pub fn minimal() -> Self {
        Self {
            show_header: false,
            show_stats: false,
        }
    }

    fn render_grid(&self, state: &GameState) -> String {
        let divider = "+------".repeat(GRID_SIZE) + "+\n";
        let mut out = String::new();
        out.push_str(&divider);
        for row in state.grid.iter() {
            out.push('|');
            for &value in row.iter() {
                if value == 0 {
                    out.push_str("      |");
                } else {
                    out.push_str(&format!("{:^6}|", value));
                }
            }
            out.push('\n');
            out.push_str(&divider);
        }
        out
    }
}

impl Renderer for TextRenderer {
    type Output = String;
    type Error = std::convert::Infallible;

    fn render(&self, state: &GameState) -> Result<String, Self::Error> {
        let mut output = String::new();

        if self.show_header {
            output.push_str(&format!(
                "Moves: {} | Episode: {}{}\n",
                state.moves,
                state.episode,
                if state.over { " [GAME OVER]" } else { "" }
            ));
        }
        if self.show_stats {
            output.push_str(&format!(
                "Score: {} | Max tile: {}\n",
                state.score, state.max_tile
            ));
        }
        if self.show_header || self.show_stats {
            output.push('\n');
        }

        output.push_str(&self.render_grid(state));
        Ok(output)
    }
}

/// JSON renderer for structured output
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Output = String;
    type Error = serde_json::Error;

    fn render(&self, state: &GameState) -> Result<String, Self::Error> {
        serde_json::to_string_pretty(state)
    }
}

/// Compact JSON renderer (no pretty printing)
pub struct CompactJsonRenderer;

impl Renderer for CompactJsonRenderer {
    type Output = String;
    type Error = serde_json::Error;

    fn render(&self, state: &GameState) -> Result<String, Self::Error> {
        serde_json::to_string(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::session::Game;

    #[test]
    fn test_text_renderer() {
        let game = Game::new(GameConfig::seeded(42));
        let state = game.get_state();

        let renderer = TextRenderer::new();
        let output = renderer.render(&state).unwrap();

        assert!(output.contains("Moves:"));
        assert!(output.contains("Score:"));
        assert!(output.contains("+------+"));
    }

    #[test]
    fn test_minimal_text_renderer_is_grid_only() {
        let game = Game::new(GameConfig::seeded(42));
        let output = TextRenderer::minimal().render(&game.get_state()).unwrap();

        assert!(!output.contains("Score:"));
        assert!(output.starts_with("+------+"));
        // 4 rows plus 5 dividers
        assert_eq!(output.lines().count(), 9);
    }

    #[test]
    fn test_json_renderer() {
        let game = Game::new(GameConfig::seeded(42));
        let state = game.get_state();

        let renderer = JsonRenderer;
        let output = renderer.render(&state).unwrap();

        assert!(output.contains("\"grid\""));
        assert!(output.contains("\"max_tile\""));
    }

    #[test]
    fn test_compact_json_has_no_newlines() {
        let game = Game::new(GameConfig::seeded(42));
        let output = CompactJsonRenderer.render(&game.get_state()).unwrap();
        assert!(!output.contains('\n'));
    }
}
