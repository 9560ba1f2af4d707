// src/scene.rs

use log::debug;

use crate::canvas::{palette, Canvas};
use crate::config::SessionConfig;
use crate::geometry::{GridPoint, Point2, ShadowPolygon, Viewport};
use crate::grid;
use crate::occluders::OccluderSet;
use crate::selection::{Mode, SelectionEvent};
use crate::shadow::build_shadows;

const PENDING_MARKER_RADIUS: f32 = 4.0;
const LIGHT_MARKER_RADIUS: f32 = 6.0;

/// Edge-triggered input, at most one of each per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Confirm,
    Cancel,
    ClearAll,
    ToggleForward,
    ToggleBackward,
}

#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub pointer: Point2,
    pub events: Vec<InputEvent>,
}

/// One editing session: occluders, mode, and the shadows of the last frame.
pub struct Scene {
    config: SessionConfig,
    viewport: Viewport,
    occluders: OccluderSet,
    mode: Mode,
    light: Point2,
    shadows: Vec<ShadowPolygon>,
}

impl Scene {
    pub fn new(config: SessionConfig) -> Self {
        let viewport = config.viewport();
        Self {
            light: viewport.center(),
            config,
            viewport,
            occluders: OccluderSet::new(),
            mode: Mode::default(),
            shadows: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn occluders(&self) -> &OccluderSet {
        &self.occluders
    }

    pub fn light(&self) -> Point2 {
        self.light
    }

    /// Shadows built by the last frame; empty unless casting.
    pub fn last_shadows(&self) -> &[ShadowPolygon] {
        &self.shadows
    }

    fn translate(event: InputEvent, cursor: Option<GridPoint>) -> Option<SelectionEvent> {
        match event {
            InputEvent::Confirm => cursor.map(SelectionEvent::Confirm),
            InputEvent::Cancel => Some(SelectionEvent::Cancel(cursor)),
            InputEvent::ClearAll => Some(SelectionEvent::ClearAll),
            InputEvent::ToggleForward => Some(SelectionEvent::ToggleForward),
            InputEvent::ToggleBackward => Some(SelectionEvent::ToggleBackward),
        }
    }

    /// Runs one frame: input, state machine, shadows, then draw commands.
    pub fn frame(&mut self, input: &FrameInput, canvas: &mut impl Canvas) {
        let cursor = grid::snap_in_viewport(input.pointer, &self.viewport, self.config.grid_size);

        for &event in &input.events {
            let Some(event) = Self::translate(event, cursor) else {
                continue;
            };
            let (mode, command) = self.mode.step(event);
            if mode != self.mode {
                debug!("Mode {:?} -> {:?}", self.mode, mode);
            }
            self.mode = mode;
            if let Some(command) = command {
                command.apply(&mut self.occluders);
            }
        }

        self.light = self.viewport.clamp(input.pointer);
        self.shadows.clear();
        if self.mode.is_casting() {
            self.shadows = build_shadows(
                self.light,
                &self.occluders,
                &self.viewport,
                self.config.grid_size,
            );
        }

        self.draw(cursor, canvas);
    }

    fn draw(&self, cursor: Option<GridPoint>, canvas: &mut impl Canvas) {
        let g = self.config.grid_size;
        let vp = &self.viewport;

        if self.mode.is_casting() {
            canvas.fill_rect(
                Point2::new(vp.left, vp.top),
                Point2::new(vp.right, vp.bottom),
                palette::LIT,
            );
            for shadow in &self.shadows {
                for [a, b, c] in shadow.triangles() {
                    canvas.fill_triangle(a, b, c, palette::SHADOW);
                }
            }
        }

        for (from, to) in grid::grid_lines(vp, g) {
            canvas.line(from, to, palette::GRID);
        }

        for segment in &self.occluders {
            let (from, to) = segment.to_pixels(g);
            canvas.line(from, to, palette::OCCLUDER);
        }

        match self.mode {
            Mode::Cast => canvas.circle(self.light, LIGHT_MARKER_RADIUS, palette::LIGHT),
            Mode::Select | Mode::Pending(_) => {
                if let Some(cursor) = cursor {
                    canvas.circle(cursor.to_pixel(g), self.config.highlight_radius, palette::HIGHLIGHT);
                }
                if let Some(pending) = self.mode.pending() {
                    canvas.circle(pending.to_pixel(g), PENDING_MARKER_RADIUS, palette::PENDING);
                }
            }
        }
    }
}
