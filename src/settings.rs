use crate::{
    foundation::core::{Argb, Canvas},
    foundation::error::{CueError, CueResult},
};

/// Configuration for simulated (offline) runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Clock advance per simulated frame.
    pub frame_interval_ms: u64,
    /// Frames after which a simulated run is cancelled.
    pub max_frames: u64,
    /// Color the surface is cleared to before the first frame.
    pub clear: Argb,
    pub canvas: Canvas,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            max_frames: 100_000,
            clear: Argb(0xff00_0000),
            canvas: Canvas {
                width: 320,
                height: 240,
            },
        }
    }
}

impl RunSettings {
    pub fn validate(&self) -> CueResult<()> {
        if self.frame_interval_ms == 0 {
            return Err(CueError::validation("frame_interval_ms must be > 0"));
        }
        if self.max_frames == 0 {
            return Err(CueError::validation("max_frames must be > 0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(CueError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
