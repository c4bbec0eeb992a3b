//! Audio cues for phase transitions.
//!
//! Cue files are preloaded into memory once; playback decodes from the
//! cached bytes and detaches, so the worker never waits for a cue to
//! finish. The rodio output stream is not `Send`, which is why the
//! player is constructed on the worker thread and never leaves it.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::core::traits::{Chime, Cue};
use crate::error::PomwError;

/// Cue player backed by the default audio output device.
pub struct AudioPlayer {
    output: Option<(OutputStream, OutputStreamHandle)>,
    sounds: HashMap<Cue, Vec<u8>>,
    muted: bool,
}

impl AudioPlayer {
    /// Open the default output device.
    ///
    /// A missing device is tolerated here; playback will fail with a
    /// displayable error instead of refusing to start the program.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: OutputStream::try_default().ok(),
            sounds: HashMap::new(),
            muted: false,
        }
    }

    /// A player that acknowledges every cue without playing anything.
    #[must_use]
    pub fn muted() -> Self {
        Self {
            output: None,
            sounds: HashMap::new(),
            muted: true,
        }
    }

    /// Preload a cue file into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(&mut self, cue: Cue, path: &Path) -> Result<(), PomwError> {
        let bytes =
            fs::read(path).map_err(|e| PomwError::Audio(format!("{}: {e}", path.display())))?;
        self.sounds.insert(cue, bytes);
        Ok(())
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Chime for AudioPlayer {
    fn play(&self, cue: Cue) -> Result<(), PomwError> {
        if self.muted {
            return Ok(());
        }

        let Some((_stream, handle)) = &self.output else {
            return Err(PomwError::Audio("no audio output device".to_string()));
        };

        let bytes = self
            .sounds
            .get(&cue)
            .ok_or_else(|| PomwError::Audio(format!("{} is not loaded", cue.file_name())))?;

        let source = Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|e| PomwError::Audio(format!("{}: {e}", cue.file_name())))?;
        let sink = Sink::try_new(handle).map_err(|e| PomwError::Audio(e.to_string()))?;
        sink.append(source);
        sink.detach();

        Ok(())
    }
}
