use std::collections::{HashMap, HashSet};

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::*;
use crate::direction::Axis;
use crate::intersection::Lane;
use crate::scene::Scene;
use crate::signal::{SignalId, SignalState};
use crate::surface::{EntityHandle, RenderSurface};
use crate::vehicle::Vehicle;

const ROAD_WIDTH: u32 = 140;

/// SDL2 render surface. Draws only the entities the scheduler has
/// registered and not yet removed.
#[derive(Debug, Default)]
pub struct Renderer {
    live: HashSet<EntityHandle>,
    lamps: HashMap<SignalId, SignalState>,
}

impl Renderer {
    pub const VEHICLE_WIDTH: u32 = 22;
    pub const VEHICLE_LENGTH: u32 = 44;
    pub const SIGNAL_SIZE: u32 = 18;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<R>(&self, canvas: &mut Canvas<Window>, scene: &Scene<R>) -> Result<(), String>
    where
        R: crate::random::IntervalSource,
    {
        canvas.set_draw_color(Color::RGB(60, 120, 60));
        canvas.clear();

        self.render_roads(canvas)?;

        for signal in scene.controller().signals() {
            if !self.live.contains(&EntityHandle::Signal(signal.id())) {
                continue;
            }
            let state = self.lamps.get(&signal.id()).copied().unwrap_or_default();
            let post = signal.post();
            canvas.set_draw_color(Color::RGB(30, 30, 30));
            canvas.fill_rect(Rect::new(
                post.x as i32 - 2,
                post.y as i32 - 2,
                Self::SIGNAL_SIZE + 4,
                Self::SIGNAL_SIZE + 4,
            ))?;
            canvas.set_draw_color(lamp_color(state));
            canvas.fill_rect(Rect::new(
                post.x as i32,
                post.y as i32,
                Self::SIGNAL_SIZE,
                Self::SIGNAL_SIZE,
            ))?;
        }

        for vehicle in scene.vehicles() {
            if self.live.contains(&EntityHandle::Vehicle(vehicle.id())) {
                self.render_vehicle(canvas, vehicle)?;
            }
        }

        canvas.present();
        Ok(())
    }

    fn render_roads(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(50, 50, 50));
        canvas.fill_rect(Rect::new(
            0,
            (WINDOW_SIZE / 2 - ROAD_WIDTH / 2) as i32 - 120,
            WINDOW_SIZE,
            ROAD_WIDTH * 2,
        ))?;
        canvas.fill_rect(Rect::new(
            (WINDOW_SIZE / 2 - ROAD_WIDTH / 2) as i32 - 140,
            0,
            ROAD_WIDTH * 4,
            WINDOW_SIZE,
        ))?;
        Ok(())
    }

    fn render_vehicle(&self, canvas: &mut Canvas<Window>, vehicle: &Vehicle) -> Result<(), String> {
        let (w, h) = match vehicle.heading().axis() {
            Axis::Horizontal => (Self::VEHICLE_LENGTH, Self::VEHICLE_WIDTH),
            Axis::Vertical => (Self::VEHICLE_WIDTH, Self::VEHICLE_LENGTH),
        };
        let position = vehicle.position();
        let rect = Rect::new(
            position.x as i32 - (w / 2) as i32,
            position.y as i32 - (h / 2) as i32,
            w,
            h,
        );

        let color = match vehicle.lane() {
            Some(Lane::LeftHorizontal) => Color::RGB(255, 100, 100),
            Some(Lane::RightHorizontal) => Color::RGB(255, 200, 80),
            Some(Lane::TopVertical) => Color::RGB(100, 100, 255),
            Some(Lane::BottomVertical) => Color::RGB(100, 220, 255),
            None => Color::RGB(220, 220, 220),
        };
        canvas.set_draw_color(color);
        canvas.fill_rect(rect)?;
        Ok(())
    }
}

fn lamp_color(state: SignalState) -> Color {
    match state {
        SignalState::Stop => Color::RGB(220, 30, 30),
        SignalState::Go => Color::RGB(30, 220, 30),
    }
}

impl RenderSurface for Renderer {
    fn add_entity(&mut self, handle: EntityHandle) {
        self.live.insert(handle);
    }

    fn remove_entity(&mut self, handle: EntityHandle) {
        self.live.remove(&handle);
        if let EntityHandle::Signal(id) = handle {
            self.lamps.remove(&id);
        }
    }

    fn signal_changed(&mut self, id: SignalId, state: SignalState) {
        self.lamps.insert(id, state);
    }
}
