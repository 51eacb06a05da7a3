use glam::Vec3;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{CAR_HALF_EXTENTS, GROUND_EXTENT, MAX_SPEED, WINDOW_SIZE};
use crate::simulation::{Frame, Simulation};

/// Meters of world visible across the window.
const VIEW_SPAN: f32 = 200.0;

/// Top-down projection of the 3D world onto the SDL2 canvas, centered on
/// the follow camera. World x maps to screen x, world z to screen y
/// (flipped so +z is up).
pub struct Renderer {
    scale: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            scale: WINDOW_SIZE as f32 / VIEW_SPAN,
        }
    }

    fn to_screen(&self, view: Vec3, x: f32, z: f32) -> (i32, i32) {
        let half = WINDOW_SIZE as f32 / 2.0;
        let sx = (x - view.x) * self.scale + half;
        let sy = (view.z - z) * self.scale + half;
        (sx as i32, sy as i32)
    }

    fn world_rect(&self, view: Vec3, center_x: f32, center_z: f32, width: f32, depth: f32) -> Rect {
        let (x, y) = self.to_screen(view, center_x - width / 2.0, center_z + depth / 2.0);
        let w = ((width * self.scale) as u32).max(1);
        let h = ((depth * self.scale) as u32).max(1);
        Rect::new(x, y, w, h)
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        simulation: &Simulation,
        frame: &Frame,
        view: Vec3,
    ) -> Result<(), String> {
        // Grass ground.
        canvas.set_draw_color(Color::RGB(79, 143, 79));
        canvas.clear();

        self.draw_ground_edge(canvas, view)?;
        self.draw_roads(canvas, simulation, view)?;
        self.draw_obstacles(canvas, simulation, view)?;
        self.draw_car(canvas, frame, view)?;
        self.draw_hud(canvas, frame)?;

        canvas.present();
        Ok(())
    }

    fn draw_ground_edge(&self, canvas: &mut Canvas<Window>, view: Vec3) -> Result<(), String> {
        // Sky-colored void beyond the ground plane.
        canvas.set_draw_color(Color::RGB(145, 196, 255));
        let e = GROUND_EXTENT;
        let (left, top) = self.to_screen(view, -e, e);
        let (right, bottom) = self.to_screen(view, e, -e);
        let window = WINDOW_SIZE as i32;
        if left > 0 {
            canvas.fill_rect(Rect::new(0, 0, left.min(window).max(0) as u32, WINDOW_SIZE))?;
        }
        if right < window {
            let w = (window - right).max(0) as u32;
            canvas.fill_rect(Rect::new(right.max(0), 0, w, WINDOW_SIZE))?;
        }
        if top > 0 {
            canvas.fill_rect(Rect::new(0, 0, WINDOW_SIZE, top.min(window).max(0) as u32))?;
        }
        if bottom < window {
            let h = (window - bottom).max(0) as u32;
            canvas.fill_rect(Rect::new(0, bottom.max(0), WINDOW_SIZE, h))?;
        }
        Ok(())
    }

    fn draw_roads(
        &self,
        canvas: &mut Canvas<Window>,
        simulation: &Simulation,
        view: Vec3,
    ) -> Result<(), String> {
        for road in simulation.world().roads() {
            let (width, depth) = if road.horizontal {
                (road.length, road.width)
            } else {
                (road.width, road.length)
            };
            canvas.set_draw_color(Color::RGB(45, 45, 45));
            canvas.fill_rect(self.world_rect(view, road.x, road.z, width, depth))?;

            // Center lane stripe.
            canvas.set_draw_color(Color::RGB(255, 243, 161));
            let stripe = if road.horizontal {
                self.world_rect(view, road.x, road.z, road.length * 0.9, 0.6)
            } else {
                self.world_rect(view, road.x, road.z, 0.6, road.length * 0.9)
            };
            canvas.fill_rect(stripe)?;
        }
        Ok(())
    }

    fn draw_obstacles(
        &self,
        canvas: &mut Canvas<Window>,
        simulation: &Simulation,
        view: Vec3,
    ) -> Result<(), String> {
        for obstacle in simulation.world().obstacles() {
            let bounds = obstacle.bounds();
            let center = bounds.center();
            let half = bounds.half_extents();
            // Taller buildings draw lighter, a cheap height cue.
            let shade = 120u8.saturating_add((bounds.max.y.min(25.0) * 4.0) as u8);
            canvas.set_draw_color(Color::RGB(shade, shade, shade));
            canvas.fill_rect(self.world_rect(view, center.x, center.z, half.x * 2.0, half.z * 2.0))?;
        }
        Ok(())
    }

    fn draw_car(&self, canvas: &mut Canvas<Window>, frame: &Frame, view: Vec3) -> Result<(), String> {
        let (cx, cy) = self.to_screen(view, frame.position.x, frame.position.z);
        let size = ((CAR_HALF_EXTENTS.z * 2.0 * self.scale) as i32).max(6);
        let rect = Rect::new(cx - size / 2, cy - size / 2, size as u32, size as u32);

        canvas.set_draw_color(Color::RGB(215, 46, 46));
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.draw_rect(rect)?;

        // Heading indicator.
        let nose = 2 * size;
        let dx = (frame.heading.sin() * nose as f32) as i32;
        let dy = -(frame.heading.cos() * nose as f32) as i32;
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.draw_line((cx, cy), (cx + dx, cy + dy))?;

        Ok(())
    }

    fn draw_hud(&self, canvas: &mut Canvas<Window>, frame: &Frame) -> Result<(), String> {
        // Panel backdrop.
        canvas.set_draw_color(Color::RGBA(10, 10, 18, 200));
        canvas.fill_rect(Rect::new(10, 10, 220, 46))?;
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        canvas.draw_rect(Rect::new(10, 10, 220, 46))?;

        // Speed bar, full width at top speed. Flash red on impact.
        let top_kmh = MAX_SPEED * 3.6;
        let fill = ((frame.speed_kmh as f32 / top_kmh).min(1.0) * 200.0) as u32;
        if frame.collided {
            canvas.set_draw_color(Color::RGB(255, 60, 60));
        } else {
            canvas.set_draw_color(Color::RGB(77, 216, 255));
        }
        if fill > 0 {
            canvas.fill_rect(Rect::new(20, 18, fill, 12))?;
        }

        // Distance pips, one per 100 m, capped at the panel width.
        canvas.set_draw_color(Color::RGB(120, 255, 120));
        let pips = ((frame.distance_m / 100) as i32).min(25);
        for i in 0..pips {
            canvas.fill_rect(Rect::new(20 + i * 8, 38, 6, 10))?;
        }

        Ok(())
    }
}
