//! SDL2 frontend: paint blocks with the mouse, spacebar toggles the brush
//! between static (white) and falling (blue) blocks.

use blockfall_sim::cell::Material;
use blockfall_sim::Grid;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, WindowCanvas};
use std::time::{Duration, Instant};
use tracing::info;

const WINDOW_W: u32 = 800;
const WINDOW_H: u32 = 600;
const CELL_SIZE: u32 = 10;
const GRID_W: usize = (WINDOW_W / CELL_SIZE) as usize;
const GRID_H: usize = (WINDOW_H / CELL_SIZE) as usize;

/// Advance the simulation on every Nth rendered frame.
const STEP_DIVISOR: u32 = 2;
const TARGET_FPS: u32 = 60;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const GRID_LINE: Color = Color::RGBA(200, 200, 200, 20);

fn material_color(material: Material) -> Option<Color> {
    match material {
        Material::Empty => None,
        Material::Static => Some(Color::RGB(255, 255, 255)),
        Material::Falling => Some(Color::RGB(150, 180, 255)),
    }
}

/// Window pixel position to grid cell coordinates.
fn cell_coords(pixel_x: i32, pixel_y: i32) -> (i32, i32) {
    (pixel_x / CELL_SIZE as i32, pixel_y / CELL_SIZE as i32)
}

fn paint_at(grid: &mut Grid, pixel_x: i32, pixel_y: i32) {
    let (gx, gy) = cell_coords(pixel_x, pixel_y);
    let material = grid.brush();
    grid.paint(gx, gy, material);
}

fn render(canvas: &mut WindowCanvas, grid: &Grid) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    for y in 0..grid.height {
        for x in 0..grid.width {
            let cell = grid.get(x as i32, y as i32);
            if let Some(color) = material_color(cell.material) {
                canvas.set_draw_color(color);
                canvas.fill_rect(Rect::new(
                    (x as u32 * CELL_SIZE) as i32,
                    (y as u32 * CELL_SIZE) as i32,
                    CELL_SIZE,
                    CELL_SIZE,
                ))?;
            }
        }
    }

    // Translucent grid overlay
    canvas.set_draw_color(GRID_LINE);
    for x in (0..WINDOW_W as i32).step_by(CELL_SIZE as usize) {
        canvas.draw_line((x, 0), (x, WINDOW_H as i32))?;
    }
    for y in (0..WINDOW_H as i32).step_by(CELL_SIZE as usize) {
        canvas.draw_line((0, y), (WINDOW_W as i32, y))?;
    }

    canvas.present();
    Ok(())
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt().init();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;

    let window = video
        .window("blockfall", WINDOW_W, WINDOW_H)
        .position_centered()
        .allow_highdpi()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    info!(grid_w = GRID_W, grid_h = GRID_H, cell_size = CELL_SIZE, "window created");

    let mut grid = Grid::new(GRID_W, GRID_H);
    let mut event_pump = sdl.event_pump()?;
    let mut mouse_down = false;
    let mut frame: u32 = 0;

    let frame_duration = Duration::from_secs_f64(1.0 / f64::from(TARGET_FPS));

    'running: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown { keycode: Some(k), .. } => match k {
                    Keycode::Escape | Keycode::Q => break 'running,
                    Keycode::Space => grid.toggle_brush(),
                    Keycode::C => grid.clear(),
                    _ => {}
                },
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    mouse_down = true;
                    paint_at(&mut grid, x, y);
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => {
                    mouse_down = false;
                }
                Event::MouseMotion { x, y, .. } if mouse_down => {
                    paint_at(&mut grid, x, y);
                }
                _ => {}
            }
        }

        if frame % STEP_DIVISOR == 0 {
            grid.tick();
        }
        frame = frame.wrapping_add(1);

        render(&mut canvas, &grid)?;

        // Frame limiting
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("shutting down");
    Ok(())
}
