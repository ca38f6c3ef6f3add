//! Frame rendering over an abstract 2D drawing surface
//!
//! The simulation never draws. The engine hands a `GameState` to
//! `draw_frame`, which issues fill commands through `DrawSurface`. The
//! wasm driver implements the trait over a canvas 2D context; headless
//! runs and tests use `RecordingSurface`.

use crate::sim::GameState;

/// Fill color for draw commands, as a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const BACKGROUND: Color = Color("black");
    pub const BALL: Color = Color("white");
    pub const PADDLE: Color = Color("white");
    pub const BRICK: Color = Color("blue");
}

/// Minimal 2D drawing surface the engine renders through.
///
/// Implementations expose their current pixel size and accept fill
/// commands; the engine never reads pixels back.
pub trait DrawSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Resize the backing surface to the playfield size. Canvas
    /// implementations resize the element itself.
    fn set_size(&mut self, width: f32, height: f32);
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Filled circle; canvas implementations trace a full arc path.
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32);
}

/// Draw one frame: background, ball, paddle, then the live bricks on top
/// (the grid occupies the upper region only, so bricks last is safe and
/// keeps them crisp over the clear).
pub fn draw_frame(state: &GameState, surface: &mut dyn DrawSurface) {
    let m = &state.metrics;

    surface.set_fill(Color::BACKGROUND);
    surface.fill_rect(0.0, 0.0, surface.width(), surface.height());

    surface.set_fill(Color::BALL);
    surface.fill_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius);

    surface.set_fill(Color::PADDLE);
    surface.fill_rect(
        state.paddle.x,
        m.height - m.paddle_edge_offset,
        m.paddle_width,
        m.paddle_thickness,
    );

    surface.set_fill(Color::BRICK);
    for (col, row) in state.grid.alive_cells() {
        surface.fill_rect(
            col as f32 * m.brick_w,
            row as f32 * m.brick_h,
            m.brick_w - m.brick_gap,
            m.brick_h - m.brick_gap,
        );
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
}

/// `DrawSurface` that records commands instead of rasterizing. Used by the
/// native headless run and by tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Drop the recorded commands, keeping the size.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect { x, y, w, h });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.commands.push(DrawCommand::Circle { cx, cy, r });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_order_and_counts() {
        let tuning = Tuning::default();
        let state = GameState::new(800.0, 600.0, &tuning);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        // background -> ball -> paddle -> bricks
        assert_eq!(surface.commands[0], DrawCommand::Fill(Color::BACKGROUND));
        assert_eq!(
            surface.commands[1],
            DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                w: 800.0,
                h: 600.0
            }
        );
        assert_eq!(surface.commands[2], DrawCommand::Fill(Color::BALL));
        assert!(matches!(surface.commands[3], DrawCommand::Circle { .. }));
        assert_eq!(surface.commands[4], DrawCommand::Fill(Color::PADDLE));
        assert!(matches!(surface.commands[5], DrawCommand::Rect { .. }));
        assert_eq!(surface.commands[6], DrawCommand::Fill(Color::BRICK));

        let brick_rects = surface.commands[7..]
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(brick_rects as u32, state.grid.remaining());
        assert_eq!(surface.commands.len(), 7 + 140);
    }

    #[test]
    fn test_bricks_inset_by_gap() {
        let tuning = Tuning::default();
        let state = GameState::new(800.0, 600.0, &tuning);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        // First alive brick is (0, 3): cell pitch 80x20, gap 2
        assert_eq!(
            surface.commands[7],
            DrawCommand::Rect {
                x: 0.0,
                y: 60.0,
                w: 78.0,
                h: 18.0
            }
        );
    }

    #[test]
    fn test_ball_drawn_at_position() {
        let tuning = Tuning::default();
        let state = GameState::new(800.0, 600.0, &tuning);
        let mut surface = RecordingSurface::new(800.0, 600.0);

        draw_frame(&state, &mut surface);

        assert_eq!(
            surface.commands[3],
            DrawCommand::Circle {
                cx: state.ball.pos.x,
                cy: state.ball.pos.y,
                r: state.ball.radius
            }
        );
    }
}
