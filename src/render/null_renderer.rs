use crate::error::SettingsResult;
use crate::render::{Renderer, SettingsFrame};

/// Headless renderer used by tests and server-side validation.
///
/// It still validates the frame so malformed widget trees are caught before a
/// real view layer sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_group_count: usize,
    pub last_control_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SettingsFrame) -> SettingsResult<()> {
        frame.validate()?;
        self.last_group_count = frame.groups.len();
        self.last_control_count = frame.controls().count();
        self.frames_rendered += 1;
        Ok(())
    }
}
