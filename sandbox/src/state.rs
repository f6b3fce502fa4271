//! Handles the interactive state for the sandbox.

use gravity::bodies::{Body, Vec3, DELTA_T};
use gravity::camera::{Pan, Pose};
use gravity::indicator::Indicator;
use gravity::Space;

use ggez::event::{EventHandler, KeyCode, KeyMods, MouseButton};
use ggez::nalgebra::Point2;
use ggez::{
    graphics::{self, DrawMode, DrawParam, MeshBuilder, Text},
    input::keyboard,
    timer, Context, GameResult,
};

use graphics::Color;

/// Where the placement gesture currently is.
enum Gesture {
    /// Nothing in progress; the simulation runs.
    Idle,
    /// Button held, dragging the new body's radius out.
    Sizing,
    /// Button released, dragging the starting-velocity arrow.
    Aiming,
}

/// The state of the whole sandbox.
pub struct State {
    space: Space,
    gesture: Gesture,
    /// The body being placed. Lives here, not in the space, until commit.
    pending: Option<Body>,
    /// The freestanding arrow being dragged out to aim the velocity.
    aim: Option<Indicator>,
    paused: bool,
}

impl State {
    pub fn new(_ctx: &mut Context, starters: Vec<Body>) -> Self {
        let mut space = Space::new();
        for body in starters {
            space.insert(body);
        }
        State {
            space,
            gesture: Gesture::Idle,
            pending: None,
            aim: None,
            paused: false,
        }
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        const DESIRED_FPS: u32 = 60;
        while timer::check_update_time(ctx, DESIRED_FPS) {
            // Hold the arrow keys to pan.
            if keyboard::is_key_pressed(ctx, KeyCode::Left) {
                self.space.camera.pan(Pan::Left);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Right) {
                self.space.camera.pan(Pan::Right);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Up) {
                self.space.camera.pan(Pan::Up);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Down) {
                self.space.camera.pan(Pan::Down);
            }

            if !self.paused {
                self.space.update(DELTA_T);
            }
        }
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button != MouseButton::Left {
            return;
        }
        match self.gesture {
            Gesture::Idle => {
                // A new body starts under the cursor at the minimum size.
                // Everything else holds its breath until it's committed.
                self.paused = true;
                self.pending = Some(Body::planet(Vec3::new(x as f64, y as f64, 0.0)));
                self.gesture = Gesture::Sizing;
            }
            Gesture::Sizing => {}
            Gesture::Aiming => {
                // Second click: read the arrow back as a velocity and let
                // the body loose. Screen y points down, so flip it.
                if let (Some(mut body), Some(arrow)) = (self.pending.take(), self.aim.take()) {
                    let vc = arrow.velocity_component();
                    body.commit_velocity(Vec3::new(vc.x, -vc.y, 0.0));
                    self.space.insert(body);
                }
                self.gesture = Gesture::Idle;
                self.paused = false;
            }
        }
    }

    fn mouse_button_up_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) {
        if button != MouseButton::Left {
            return;
        }
        if let Gesture::Sizing = self.gesture {
            if let Some(body) = self.pending.as_mut() {
                let center = body.pos;
                let cursor = Vec3::new(x as f64, y as f64, 0.0);
                body.set_radius((cursor - center).length().floor());

                self.aim = Some(Indicator::freestanding(center));
                self.gesture = Gesture::Aiming;
            }
        }
    }

    fn mouse_motion_event(&mut self, _ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Sizing => {
                if let Some(body) = self.pending.as_mut() {
                    let center = body.pos;
                    let cursor = Vec3::new(x as f64, y as f64, 0.0);
                    body.set_radius((cursor - center).length().floor());
                }
            }
            Gesture::Aiming => {
                if let Some(arrow) = self.aim.as_mut() {
                    arrow.set_end(Vec3::new(x as f64, y as f64, 0.0));
                }
            }
        }
    }

    fn mouse_wheel_event(&mut self, _ctx: &mut Context, _x: f32, y: f32) {
        let ok = if y > 0.0 {
            self.space.camera.zoom_in()
        } else if y < 0.0 {
            self.space.camera.zoom_out()
        } else {
            return;
        };
        if !ok {
            println!("Can't zoom any further that way");
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        match keycode {
            KeyCode::Space => self.space.clear(),
            KeyCode::Insert => self.space.camera.set_pose(Pose::Front),
            KeyCode::Delete => self.space.camera.set_pose(Pose::Normal),
            KeyCode::P => {
                // Only a free pause; a placement in progress keeps its own.
                if let Gesture::Idle = self.gesture {
                    self.paused = !self.paused;
                }
            }
            KeyCode::Escape => ggez::event::quit(ctx),
            _ => {}
        }
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, Color::from_rgb_u32(BACKGROUND_COLOR));

        let (scr_w, scr_h) = graphics::drawable_size(ctx);

        for body in self.space.bodies() {
            let pos = Point2::new(body.draw_pos.x as f32, body.draw_pos.y as f32);
            let radius = body.radius() as f32;

            // Only spend processing time drawing it if it's in frame.
            if pos.x + radius > 0.0
                && pos.x - radius <= scr_w
                && pos.y + radius > 0.0
                && pos.y - radius <= scr_h
            {
                draw_body(ctx, pos, radius, body.color, body.outline)?;
            }
        }

        for arrow in self.space.indicators() {
            draw_arrow(
                ctx,
                Point2::new(arrow.draw_start.x as f32, arrow.draw_start.y as f32),
                Point2::new(arrow.draw_end.x as f32, arrow.draw_end.y as f32),
                arrow.color,
                arrow.thickness,
            )?;
        }

        // Gesture overlays live in raw screen space.
        if let Some(body) = &self.pending {
            draw_body(
                ctx,
                Point2::new(body.pos.x as f32, body.pos.y as f32),
                body.radius() as f32,
                body.color,
                body.outline,
            )?;
        }
        if let Some(arrow) = &self.aim {
            draw_arrow(
                ctx,
                Point2::new(arrow.start.x as f32, arrow.start.y as f32),
                Point2::new(arrow.end.x as f32, arrow.end.y as f32),
                arrow.color,
                arrow.thickness,
            )?;
        }

        // Camera readout in the corner.
        let camera = &self.space.camera;
        let hud = Text::new(format!(
            "X: {:.1}, Y: {:.1}, Z: {:.1}",
            camera.position.x, camera.position.y, camera.position.z
        ));
        graphics::draw(ctx, &hud, DrawParam::default().dest(Point2::new(5.0, 5.0)))?;

        graphics::present(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        self.fix_coordinates(ctx, width, height).unwrap(); // GGEZ official examples say to unwrap this... idk
    }
}

/// A filled circle with an outline ring.
fn draw_body(ctx: &mut Context, pos: Point2<f32>, radius: f32, color: u32, outline: u32) -> GameResult<()> {
    let mesh = MeshBuilder::new()
        .circle(
            DrawMode::fill(),
            pos,
            radius,
            0.1,
            Color::from_rgb_u32(color),
        )
        .circle(
            DrawMode::stroke((radius / 10.0).max(1.0)),
            pos,
            radius,
            0.1,
            Color::from_rgb_u32(outline),
        )
        .build(ctx)?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

/// A line with a little triangle on the tip.
fn draw_arrow(
    ctx: &mut Context,
    start: Point2<f32>,
    end: Point2<f32>,
    color: u32,
    thickness: f32,
) -> GameResult<()> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if (dx * dx + dy * dy).sqrt() < 1.0 {
        // Too short to aim the head anywhere.
        return Ok(());
    }

    let color = Color::from_rgb_u32(color);
    let mesh = MeshBuilder::new()
        .line(&[start, end], thickness, color)?
        .polygon(DrawMode::fill(), &arrowhead(start, end), color)?
        .build(ctx)?;
    graphics::draw(ctx, &mesh, DrawParam::default())
}

/// The three corners of the arrowhead, turned to point along the arrow.
fn arrowhead(start: Point2<f32>, end: Point2<f32>) -> [Point2<f32>; 3] {
    const SCALE: f32 = 3.0;
    // Template triangle pointing up its own y axis.
    let template = [(0.0f32, 2.0f32), (-1.0, -2.0), (1.0, -2.0)];

    let angle = (start.y - end.y).atan2(end.x - start.x);
    let turn = 270f32.to_radians() - angle;
    let (sin, cos) = turn.sin_cos();

    let mut corners = [Point2::new(0.0, 0.0); 3];
    for (corner, &(x, y)) in corners.iter_mut().zip(template.iter()) {
        let x = x * SCALE;
        let y = y * SCALE;
        *corner = Point2::new(x * cos - y * sin + end.x, x * sin + y * cos + end.y);
    }
    corners
}

const BACKGROUND_COLOR: u32 = 0x0b0b1e; // near-black blue
