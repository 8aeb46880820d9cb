use macroquad::prelude::*;

use crate::application::{EditMode, Simulation};
use crate::domain::{Coord, Grid};

pub const BACKGROUND: Color = Color::new(0.69, 0.69, 0.69, 1.0);
pub const DEAD: Color = BLACK;
pub const ALIVE: Color = WHITE;
pub const CURSOR: Color = Color::new(1.0, 0.85, 0.0, 1.0);

/// What to draw over the cursor cell
pub enum CursorStyle<'a> {
    Fill(Color),
    Icon(&'a Texture2D),
}

/// Cell size that fits the whole grid in the window
pub fn cell_size(grid: &Grid) -> (f32, f32) {
    let (width, height) = grid.dimensions();
    (
        screen_width() / width as f32,
        screen_height() / height as f32,
    )
}

/// Draw every cell row-major, then the cursor on top.
/// The caller flips the buffer with `next_frame()`.
pub fn present(grid: &Grid, cursor: Option<(Coord, CursorStyle<'_>)>) {
    clear_background(BACKGROUND);
    let (cell_w, cell_h) = cell_size(grid);

    for (coord, cell) in grid.iter_cells() {
        let color = if cell.is_alive() { ALIVE } else { DEAD };
        draw_rectangle(
            coord.col as f32 * cell_w,
            coord.row as f32 * cell_h,
            cell_w,
            cell_h,
            color,
        );
    }

    if let Some((coord, style)) = cursor {
        let (x, y) = (coord.col as f32 * cell_w, coord.row as f32 * cell_h);
        match style {
            CursorStyle::Fill(color) => draw_rectangle(x, y, cell_w, cell_h, color),
            CursorStyle::Icon(texture) => draw_texture_ex(
                texture,
                x,
                y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(cell_w, cell_h)),
                    ..Default::default()
                },
            ),
        }
    }
}

/// Status line in the top-left corner
pub fn draw_hud(sim: &Simulation) {
    let cursor = sim.cursor();
    let mode = match cursor.mode() {
        EditMode::None => "move",
        EditMode::Create => "create",
        EditMode::Remove => "remove",
    };
    let status = format!(
        "Gen {} | Pop {} | {} | {}{}",
        sim.engine().generation(),
        sim.population(),
        cursor.position(),
        mode,
        if cursor.is_paused() { " | paused" } else { "" }
    );

    let size = measure_text(&status, None, 18, 1.0);
    draw_rectangle(0.0, 0.0, size.width + 12.0, size.height + 12.0, Color::from_rgba(30, 30, 30, 200));
    draw_text(&status, 6.0, 6.0 + size.offset_y, 18.0, Color::from_rgba(0, 255, 150, 255));
}
