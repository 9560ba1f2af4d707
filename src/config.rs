// src/config.rs

use thiserror::Error;

use crate::geometry::Viewport;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least one pixel")]
    ZeroGridSize,
    #[error("screen size {width}x{height} has no area")]
    EmptyScreen { width: u32, height: u32 },
    #[error("control strip of {strip}px leaves no play area in a {height}px tall screen")]
    StripTooTall { strip: u32, height: u32 },
    #[error("expected dimensions like \"1280x820\", got {0:?}")]
    BadDimensions(String),
}

/// Session start parameters. Fixed once the window is open.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub grid_size: u32,
    /// Rows at the top reserved for instructions, not part of the play area.
    pub control_strip_height: u32,
    pub highlight_radius: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 820,
            grid_size: 20,
            control_strip_height: 100,
            highlight_radius: 10.0,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.control_strip_height >= self.screen_height {
            return Err(ConfigError::StripTooTall {
                strip: self.control_strip_height,
                height: self.screen_height,
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            0.0,
            self.control_strip_height as f32,
            self.screen_width as f32,
            self.screen_height as f32,
        )
    }
}

/// Parses `WxH` (or `W×H`) into a width and height.
pub fn parse_dimensions(input: &str) -> Result<(u32, u32), ConfigError> {
    let bad = || ConfigError::BadDimensions(input.to_string());
    let (w, h) = input
        .split_once(['x', 'X', '×'])
        .ok_or_else(bad)?;
    let width = w.trim().parse().map_err(|_| bad())?;
    let height = h.trim().parse().map_err(|_| bad())?;
    Ok((width, height))
}
