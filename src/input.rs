// src/input.rs

use winit::{
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, ModifiersState, PhysicalKey},
};

use shadow_caster::geometry::Point2;
use shadow_caster::scene::{FrameInput, InputEvent};

/// Turns window events into one `FrameInput` per frame.
pub struct InputController {
    pointer: Point2,
    events: Vec<InputEvent>,
    modifiers: ModifiersState,
    scale_factor: f64,
    quit_requested: bool,
}

impl InputController {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            pointer: Point2::default(),
            events: Vec::new(),
            modifiers: ModifiersState::empty(),
            scale_factor,
            quit_requested: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Queues an event unless it already fired this frame.
    fn push(&mut self, event: InputEvent) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.pointer = Point2::new(logical.x, logical.y);
                true
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                false
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                false
            }
            WindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => match button {
                MouseButton::Left => { self.push(InputEvent::Confirm); true }
                MouseButton::Right => { self.push(InputEvent::Cancel); true }
                _ => false,
            },
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state != ElementState::Pressed || key_event.repeat {
                    return false;
                }
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => { self.quit_requested = true; true }
                    PhysicalKey::Code(KeyCode::KeyC) => { self.push(InputEvent::ClearAll); true }
                    PhysicalKey::Code(KeyCode::Tab) if self.modifiers.shift_key() => {
                        self.push(InputEvent::ToggleBackward); true
                    }
                    PhysicalKey::Code(KeyCode::Tab) | PhysicalKey::Code(KeyCode::ArrowRight) => {
                        self.push(InputEvent::ToggleForward); true
                    }
                    PhysicalKey::Code(KeyCode::ArrowLeft) => { self.push(InputEvent::ToggleBackward); true }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Drains this frame's events; the pointer carries over.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            events: std::mem::take(&mut self.events),
        }
    }
}
