//! Drive the side menu transition from gesture samples.
//!
//! An [`InteractiveTransition`] owns at most one run. A run is either
//! interactive, following the finger until release, or programmatic, settling
//! straight to its target. The controller moves through
//!
//! ```text
//! Idle -> Armed -> Tracking -> Settling -> Idle
//! ```
//!
//! where `Armed` means a gesture began but the run has not started yet. The
//! start itself is requested from the owner and executed later through
//! [`InteractiveTransition::start`], which performs the setup of the view
//! hierarchy exactly once per run.
use crate::animation::{Curve, Settle};
use crate::core::command::{Command, Gestures, Placement};
use crate::core::gesture::{Direction, Phase, Sample};
use crate::core::surface;
use crate::core::time::Instant;
use crate::core::{Collaborator, Error, ItemOptions, Shell, Size, Transform, TransitionOptions};

/// Progress above which a released gesture commits at rest.
pub const COMMIT_PROGRESS: f32 = 0.4;

/// Progress above which a flick commits.
pub const FLICK_PROGRESS: f32 = 0.01;

/// Normalized velocity above which a flick commits.
pub const FLICK_VELOCITY: f32 = 100.0;

/// Returns whether a gesture released at `progress` with the given
/// normalized `velocity` commits its transition.
pub fn should_commit(progress: f32, velocity: f32) -> bool {
    (progress > COMMIT_PROGRESS && velocity >= 0.0)
        || (progress > FLICK_PROGRESS && velocity > FLICK_VELOCITY)
}

/// Returns the transform of the moving surface at `progress`.
///
/// When presenting, the moving surface is the snapshot of the content. When
/// dismissing, it is the content itself.
pub fn geometry(
    direction: Direction,
    progress: f32,
    options: &TransitionOptions,
    width: f32,
) -> Transform {
    let scale = options.content_scale();
    let travel = width - options.visible_content_width();

    match direction {
        Direction::Present => Transform::new(1.0 - (1.0 - scale) * progress, travel * progress),
        Direction::Dismiss => {
            Transform::new(scale + (1.0 - scale) * progress, travel * (1.0 - progress))
        }
    }
}

/// The surfaces taking part in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// The size of the container.
    pub size: Size,
    /// The menu surface.
    pub menu: surface::Id,
    /// The content surface.
    pub content: surface::Id,
    /// The surface standing in for the content while the menu is open.
    pub snapshot: surface::Id,
}

impl Stage {
    /// Resolves the [`Stage`] of a run, failing if a collaborator is unset.
    pub fn resolve(
        size: Option<Size>,
        menu: Option<surface::Id>,
        content: Option<surface::Id>,
        snapshot: surface::Id,
    ) -> Result<Self, Error> {
        Ok(Self {
            size: size.ok_or(Error::MissingCollaborator(Collaborator::Container))?,
            menu: menu.ok_or(Error::MissingCollaborator(Collaborator::Menu))?,
            content: content.ok_or(Error::MissingCollaborator(Collaborator::Content))?,
            snapshot,
        })
    }

    fn moving(&self, direction: Direction) -> surface::Id {
        match direction {
            Direction::Present => self.snapshot,
            Direction::Dismiss => self.content,
        }
    }
}

/// The outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The direction of the run.
    pub direction: Direction,
    /// Whether the run reached its target.
    pub committed: bool,
}

/// The reaction of an [`InteractiveTransition`] to a gesture sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// The sample had no effect.
    Ignored,
    /// The gesture asks for a run in the given direction to be started.
    StartRequested(Direction),
    /// The moving surface was updated.
    Updated(Transform),
    /// The gesture was released and the run is settling.
    Settling {
        /// Whether the run is settling towards its target.
        commit: bool,
    },
    /// The gesture ended before its run started.
    Discarded {
        /// Whether a start had been requested and must be withdrawn.
        start_requested: bool,
    },
}

#[derive(Debug, Clone)]
struct Run {
    direction: Direction,
    progress: f32,
    options: TransitionOptions,
    item: ItemOptions,
    stage: Stage,
}

impl Run {
    fn transform(&self, progress: f32) -> Transform {
        geometry(
            self.direction,
            progress,
            &self.options,
            self.stage.size.width,
        )
    }
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Armed {
        direction: Direction,
        requested: bool,
    },
    Tracking(Run),
    Settling {
        run: Run,
        settle: Settle,
        commit: bool,
    },
}

/// The controller of a single side menu transition.
#[derive(Debug, Clone, Default)]
pub struct InteractiveTransition {
    state: State,
}

impl InteractiveTransition {
    /// Creates a new idle [`InteractiveTransition`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no gesture or run is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Returns `true` if a run has started and not completed yet.
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Tracking(_) | State::Settling { .. })
    }

    /// Returns `true` if a run is animating towards its end.
    pub fn is_settling(&self) -> bool {
        matches!(self.state, State::Settling { .. })
    }

    /// Returns the direction of the current gesture or run, if any.
    pub fn direction(&self) -> Option<Direction> {
        match &self.state {
            State::Idle => None,
            State::Armed { direction, .. } => Some(*direction),
            State::Tracking(run) | State::Settling { run, .. } => Some(run.direction),
        }
    }

    /// Returns the last displayed progress of the current run, if any.
    pub fn progress(&self) -> Option<f32> {
        match &self.state {
            State::Tracking(run) | State::Settling { run, .. } => Some(run.progress),
            State::Idle | State::Armed { .. } => None,
        }
    }

    /// Processes a gesture [`Sample`] in the given [`Direction`].
    pub fn handle(
        &mut self,
        direction: Direction,
        sample: Sample,
        shell: &mut Shell<'_>,
    ) -> Response {
        match sample.phase {
            Phase::Began => self.began(direction, sample),
            Phase::Changed => self.changed(direction, sample, shell),
            Phase::Ended | Phase::Cancelled => self.ended(direction, sample, shell),
        }
    }

    fn began(&mut self, direction: Direction, sample: Sample) -> Response {
        match self.state {
            State::Idle => {
                let requested = direction.normalize(sample.velocity) >= 0.0;

                log::trace!(
                    "Transition: {direction:?} gesture began (velocity {}, start {requested})",
                    sample.velocity
                );

                self.state = State::Armed {
                    direction,
                    requested,
                };

                if requested {
                    Response::StartRequested(direction)
                } else {
                    Response::Ignored
                }
            }
            State::Settling { .. } => {
                log::warn!("Transition: ignoring {direction:?} gesture while settling");
                Response::Ignored
            }
            State::Armed { .. } | State::Tracking(_) => {
                log::trace!("Transition: a gesture is already in progress");
                Response::Ignored
            }
        }
    }

    fn changed(&mut self, direction: Direction, sample: Sample, shell: &mut Shell<'_>) -> Response {
        match &mut self.state {
            State::Armed {
                direction: armed,
                requested,
            } if *armed == direction && !*requested && direction.is_forward(sample.translation) => {
                *requested = true;

                Response::StartRequested(direction)
            }
            State::Tracking(run)
                if run.direction == direction && direction.is_forward(sample.translation) =>
            {
                run.progress = sample.progress(run.stage.size.width);

                let transform = run.transform(run.progress);

                shell.publish(Command::SetTransform {
                    surface: run.stage.moving(direction),
                    transform,
                });

                Response::Updated(transform)
            }
            _ => Response::Ignored,
        }
    }

    fn ended(&mut self, direction: Direction, sample: Sample, shell: &mut Shell<'_>) -> Response {
        match std::mem::take(&mut self.state) {
            State::Armed {
                direction: armed,
                requested,
            } if armed == direction => {
                log::trace!("Transition: {direction:?} gesture ended before its run started");

                Response::Discarded {
                    start_requested: requested,
                }
            }
            State::Tracking(run) if run.direction == direction => {
                let released = sample.progress(run.stage.size.width);
                let velocity = direction.normalize(sample.velocity);
                let commit = should_commit(released, velocity);

                log::trace!(
                    "Transition: released at {released:.3} with velocity {velocity:.1}, commit {commit}"
                );

                self.settle(run, commit, shell);

                Response::Settling { commit }
            }
            state => {
                self.state = state;

                Response::Ignored
            }
        }
    }

    /// Starts a run in the given [`Direction`].
    ///
    /// An interactive run only starts if a gesture in the same direction
    /// requested it and is still in progress; returns `false` otherwise. A
    /// programmatic run settles straight towards its target.
    pub fn start(
        &mut self,
        direction: Direction,
        interactive: bool,
        stage: Stage,
        options: &TransitionOptions,
        item: &ItemOptions,
        shell: &mut Shell<'_>,
    ) -> bool {
        match self.state {
            State::Armed {
                direction: armed,
                requested: true,
            } if interactive && armed == direction => {}
            State::Idle | State::Armed { .. } if !interactive => {}
            _ => {
                log::debug!("Transition: {direction:?} start withdrawn");
                return false;
            }
        }

        let run = Run {
            direction,
            progress: 0.0,
            options: *options,
            item: *item,
            stage,
        };

        log::debug!(
            "Transition: starting {} {direction:?} run",
            if interactive { "interactive" } else { "programmatic" }
        );

        setup(&run, shell);

        if interactive {
            self.state = State::Tracking(run);
        } else {
            self.settle(run, true, shell);
        }

        true
    }

    fn settle(&mut self, run: Run, commit: bool, shell: &mut Shell<'_>) {
        let options = &run.options;

        let curve = match (commit, run.direction) {
            (true, direction) if options.use_finishing_spring => {
                Curve::Spring(options.finishing_spring.get(direction))
            }
            (false, direction) if options.use_cancelling_spring => {
                Curve::Spring(options.cancelling_spring.get(direction))
            }
            _ => Curve::Timed(options.easing),
        };

        let settle = Settle::new(
            run.progress,
            if commit { 1.0 } else { 0.0 },
            options.remaining_duration(run.progress),
            curve,
        );

        shell.request_redraw();

        self.state = State::Settling {
            run,
            settle,
            commit,
        };
    }

    /// Advances the settling animation to `now`.
    ///
    /// Returns the [`Completion`] of the run once it lands on its target.
    pub fn tick(&mut self, now: Instant, shell: &mut Shell<'_>) -> Option<Completion> {
        let State::Settling { run, settle, commit } = &mut self.state
        else {
            return None;
        };

        let (progress, finished) = settle.sample(now);
        run.progress = progress;

        shell.publish(Command::SetTransform {
            surface: run.stage.moving(run.direction),
            transform: run.transform(progress),
        });

        if !finished {
            shell.request_redraw();
            return None;
        }

        let completion = Completion {
            direction: run.direction,
            committed: *commit,
        };

        cleanup(run, completion, shell);

        log::debug!(
            "Transition: {:?} run {}",
            completion.direction,
            if completion.committed {
                "finished"
            } else {
                "cancelled"
            }
        );

        self.state = State::Idle;

        Some(completion)
    }
}

fn setup(run: &Run, shell: &mut Shell<'_>) {
    let Stage {
        menu,
        content,
        snapshot,
        ..
    } = run.stage;

    match run.direction {
        Direction::Present => {
            shell.publish(Command::Insert {
                surface: menu,
                placement: Placement::Below(content),
            });
            shell.publish(Command::Snapshot {
                of: content,
                into: snapshot,
            });
            shell.publish(Command::Insert {
                surface: snapshot,
                placement: Placement::Top,
            });
            decorate(run, snapshot, shell);
            shell.publish(Command::SetHidden {
                surface: content,
                hidden: true,
            });
        }
        Direction::Dismiss => {
            shell.publish(Command::Insert {
                surface: content,
                placement: Placement::Top,
            });
            decorate(run, content, shell);
            shell.publish(Command::SetHidden {
                surface: snapshot,
                hidden: true,
            });
        }
    }

    set_interactive(&run.stage, false, shell);

    shell.publish(Command::SetTransform {
        surface: run.stage.moving(run.direction),
        transform: run.transform(0.0),
    });
}

fn decorate(run: &Run, surface: surface::Id, shell: &mut Shell<'_>) {
    shell.publish(Command::SetShadow {
        surface,
        shadow: Some(run.item.shadow),
    });
    shell.publish(Command::SetCornerRadius {
        surface,
        radius: run.item.corner_radius(),
    });
}

fn set_interactive(stage: &Stage, interactive: bool, shell: &mut Shell<'_>) {
    for surface in [stage.menu, stage.content] {
        shell.publish(Command::SetInteractive {
            surface,
            interactive,
        });
    }
}

fn cleanup(run: &Run, completion: Completion, shell: &mut Shell<'_>) {
    let Stage {
        menu,
        content,
        snapshot,
        ..
    } = run.stage;

    match (completion.direction, completion.committed) {
        (Direction::Present, true) => {
            shell.publish(Command::Remove(content));
            shell.publish(Command::SetHidden {
                surface: content,
                hidden: false,
            });
            shell.publish(Command::AttachGestures {
                surface: snapshot,
                gestures: Gestures::PAN | Gestures::TAP,
            });
        }
        (Direction::Present, false) => {
            shell.publish(Command::SetHidden {
                surface: content,
                hidden: false,
            });
            shell.publish(Command::Remove(snapshot));
            shell.publish(Command::Remove(menu));
        }
        (Direction::Dismiss, true) => {
            shell.publish(Command::SetShadow {
                surface: content,
                shadow: None,
            });
            shell.publish(Command::SetCornerRadius {
                surface: content,
                radius: 0.0,
            });
            shell.publish(Command::DetachGestures {
                surface: snapshot,
                gestures: Gestures::PAN | Gestures::TAP,
            });
            shell.publish(Command::Remove(snapshot));
            shell.publish(Command::Remove(menu));
        }
        (Direction::Dismiss, false) => {
            shell.publish(Command::Remove(content));
            shell.publish(Command::SetHidden {
                surface: snapshot,
                hidden: false,
            });
        }
    }

    set_interactive(&run.stage, true, shell);
}
