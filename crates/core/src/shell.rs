use crate::Command;

/// The frame a host should redraw at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Redraw the next frame.
    NextFrame,
    /// No redraw is needed.
    Wait,
}

/// A connection to the host of the side menu.
///
/// Every operation of the side menu receives a [`Shell`] and leaves its
/// visual updates in it, in the order the host must apply them.
#[derive(Debug)]
pub struct Shell<'a> {
    commands: &'a mut Vec<Command>,
    redraw_request: RedrawRequest,
    is_layout_invalid: bool,
}

impl<'a> Shell<'a> {
    /// Creates a new [`Shell`] with the provided buffer of commands.
    pub fn new(commands: &'a mut Vec<Command>) -> Self {
        Self {
            commands,
            redraw_request: RedrawRequest::Wait,
            is_layout_invalid: false,
        }
    }

    /// Returns true if the [`Shell`] contains no published commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Publish the given [`Command`] for the host to apply it.
    pub fn publish(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Returns the commands published so far.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        self.commands
    }

    /// Requests a new frame to be drawn as soon as possible.
    pub fn request_redraw(&mut self) {
        self.redraw_request = RedrawRequest::NextFrame;
    }

    /// Returns the request a redraw should happen, if any.
    #[must_use]
    pub fn redraw_request(&self) -> RedrawRequest {
        self.redraw_request
    }

    /// Returns whether the current layout is invalid or not.
    #[must_use]
    pub fn is_layout_invalid(&self) -> bool {
        self.is_layout_invalid
    }

    /// Invalidates the current layout of the container.
    ///
    /// The host will relayout the container once, no matter how many
    /// times this is called.
    pub fn invalidate_layout(&mut self) {
        self.is_layout_invalid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface;

    #[test]
    fn test_publish_keeps_order() {
        let mut commands = Vec::new();
        let mut shell = Shell::new(&mut commands);
        let id = surface::Id::unique();

        shell.publish(Command::Remove(id));
        shell.publish(Command::SetHidden {
            surface: id,
            hidden: true,
        });

        assert_eq!(shell.commands().len(), 2);
        assert_eq!(shell.commands()[0], Command::Remove(id));
    }

    #[test]
    fn test_redraw_is_requested() {
        let mut commands = Vec::new();
        let mut shell = Shell::new(&mut commands);
        assert_eq!(shell.redraw_request(), RedrawRequest::Wait);

        shell.request_redraw();
        shell.request_redraw();
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
    }

    #[test]
    fn test_layout_is_invalidated() {
        let mut commands = Vec::new();
        let mut shell = Shell::new(&mut commands);
        assert!(!shell.is_layout_invalid());

        shell.invalidate_layout();
        shell.invalidate_layout();
        assert!(shell.is_layout_invalid());
        assert!(shell.is_empty());
    }
}
