//! Coordinate the side menu lifecycle, its transition, and its content.
//!
//! A [`SideMenu`] is owned by the composition root of the host. The host
//! hands it the container and menu surfaces, registers the selectable
//! content, forwards gestures, and calls [`SideMenu::tick`] once per frame.
//! Every visual change comes back as a [`Command`] in the [`Shell`].
//!
//! Starting a run is deferred to the next tick, so [`SideMenu::open`] and
//! [`SideMenu::close`] return immediately and report their completion
//! through [`SideMenu::on_state_changed`].
use crate::core::command::{Command, Placement};
use crate::core::gesture::{Direction, Phase, Sample};
use crate::core::surface::{self, Kind, Surface};
use crate::core::time::Instant;
use crate::core::{
    Collaborator, Error, ItemOptions, Lifecycle, MenuState, Shell, Size, TransitionOptions,
};
use crate::handle::{MenuHandle, Request};
use crate::registry::{self, Registry};
use crate::transition::{InteractiveTransition, Response, Stage};

use std::collections::VecDeque;
use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Start {
        direction: Direction,
        interactive: bool,
    },
    Open,
    Close,
    Select(registry::Id),
}

#[derive(Debug, Clone, Copy)]
struct Container {
    id: surface::Id,
    size: Size,
}

/// An interactive side menu.
pub struct SideMenu {
    lifecycle: Lifecycle,
    transition: InteractiveTransition,
    registry: Registry,
    options: TransitionOptions,
    item_options: ItemOptions,
    container: Option<Container>,
    menu: Option<surface::Id>,
    content: Option<surface::Id>,
    snapshot: surface::Id,
    selected: Option<registry::Id>,
    deferred: VecDeque<Deferred>,
    handle: MenuHandle,
    on_state_changed: Option<Box<dyn FnMut(MenuState)>>,
    on_select: Option<Box<dyn FnMut(registry::Id)>>,
}

impl SideMenu {
    /// Creates a new closed [`SideMenu`] with default options.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Creates a new closed [`SideMenu`] listing the given [`Registry`].
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            lifecycle: Lifecycle::new(),
            transition: InteractiveTransition::new(),
            registry,
            options: TransitionOptions::default(),
            item_options: ItemOptions::default(),
            container: None,
            menu: None,
            content: None,
            snapshot: surface::Id::unique(),
            selected: None,
            deferred: VecDeque::new(),
            handle: MenuHandle::default(),
            on_state_changed: None,
            on_select: None,
        }
    }

    /// Sets the container hosting the side menu, its size, and the menu
    /// surface.
    pub fn set_collaborators(
        &mut self,
        container: Surface,
        size: Size,
        menu: Surface,
    ) -> Result<(), Error> {
        let container = container.expect_kind(Kind::Container)?;
        let menu = menu.expect_kind(Kind::Menu)?;

        log::debug!(
            "SideMenu: container {} ({} x {}), menu {}",
            container.id,
            size.width,
            size.height,
            menu.id
        );

        self.container = Some(Container {
            id: container.id,
            size,
        });
        self.menu = Some(menu.id);

        Ok(())
    }

    /// Replaces the [`TransitionOptions`] used by the next run.
    pub fn set_transition_options(&mut self, options: TransitionOptions) {
        self.options = options;
    }

    /// Returns the current [`TransitionOptions`].
    pub fn transition_options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Replaces the [`ItemOptions`] used by the next run.
    pub fn set_item_options(&mut self, item_options: ItemOptions) {
        self.item_options = item_options;
    }

    /// Returns the current [`ItemOptions`].
    pub fn item_options(&self) -> &ItemOptions {
        &self.item_options
    }

    /// Sets the function called whenever the [`MenuState`] changes.
    pub fn on_state_changed(&mut self, f: impl FnMut(MenuState) + 'static) {
        self.on_state_changed = Some(Box::new(f));
    }

    /// Sets the function called whenever an entry of the menu is selected.
    pub fn on_select(&mut self, f: impl FnMut(registry::Id) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    /// Returns the [`Registry`] of the menu.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the [`Registry`] of the menu for modification.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Returns a [`MenuHandle`] content surfaces can use to open or close
    /// the menu.
    pub fn handle(&self) -> MenuHandle {
        self.handle.clone()
    }

    /// Returns the current [`MenuState`].
    pub fn state(&self) -> MenuState {
        self.lifecycle.state()
    }

    /// Returns `true` if the menu is open.
    pub fn is_open(&self) -> bool {
        self.lifecycle.state().is_open()
    }

    /// Returns `true` if nothing is pending, animating, or being dragged.
    pub fn is_idle(&self) -> bool {
        self.transition.is_idle() && self.deferred.is_empty() && self.handle.is_empty()
    }

    /// Returns the selected entry, if any.
    pub fn selected(&self) -> Option<registry::Id> {
        self.selected
    }

    /// Returns the active content surface, if any.
    pub fn content(&self) -> Option<surface::Id> {
        self.content
    }

    /// Returns the surface standing in for the content while the menu is
    /// open.
    ///
    /// The host creates it on the first [`Command::Snapshot`] targeting it.
    pub fn snapshot(&self) -> surface::Id {
        self.snapshot
    }

    /// Opens the menu.
    ///
    /// Does nothing if the menu is opening or open. If the menu is closing,
    /// it opens again once closed.
    pub fn open(&mut self) -> Result<(), Error> {
        self.request(Direction::Present)
    }

    /// Closes the menu.
    ///
    /// Does nothing if the menu is closing or closed. If the menu is opening,
    /// it closes again once open.
    pub fn close(&mut self) -> Result<(), Error> {
        self.request(Direction::Dismiss)
    }

    /// Opens the menu if it is closed or closing, closes it otherwise.
    pub fn toggle(&mut self) -> Result<(), Error> {
        match self.lifecycle.state() {
            MenuState::Closed | MenuState::Closing => self.open(),
            MenuState::Open | MenuState::Opening => self.close(),
        }
    }

    fn request(&mut self, direction: Direction) -> Result<(), Error> {
        self.ensure_collaborators()?;

        let state = self.lifecycle.state();

        match (direction, state) {
            (Direction::Present, MenuState::Opening | MenuState::Open)
            | (Direction::Dismiss, MenuState::Closing | MenuState::Closed) => {
                log::debug!("SideMenu: ignoring {direction:?} request, menu is {state:?}");
            }
            (Direction::Present, MenuState::Closing) => {
                log::debug!("SideMenu: menu is closing, opening once closed");
                self.deferred.push_back(Deferred::Open);
            }
            (Direction::Dismiss, MenuState::Opening) => {
                log::debug!("SideMenu: menu is opening, closing once open");
                self.deferred.push_back(Deferred::Close);
            }
            (direction, _) => {
                if self.lifecycle.begin(direction) {
                    self.report(state);
                    self.deferred.push_back(Deferred::Start {
                        direction,
                        interactive: false,
                    });
                }
            }
        }

        Ok(())
    }

    /// Shows the content of the given registry entry.
    ///
    /// While the menu is closed, the content surface is swapped in place.
    /// While it is open, the new content is recorded and the menu closes
    /// onto it. Selections made during a transition apply once it finishes.
    pub fn select_content(
        &mut self,
        item: registry::Id,
        shell: &mut Shell<'_>,
    ) -> Result<(), Error> {
        let target = self
            .registry
            .get(item)
            .map(|item| item.target)
            .ok_or(Error::MissingCollaborator(Collaborator::Content))?
            .expect_kind(Kind::Content)?;

        if self.lifecycle.state().is_transitioning() || self.transition.is_running() {
            log::debug!("SideMenu: deferring selection until the transition finishes");
            self.deferred.push_back(Deferred::Select(item));
            return Ok(());
        }

        if self.content == Some(target.id) {
            log::trace!("SideMenu: content {} is already active", target.id);
            return Ok(());
        }

        let is_open = self.lifecycle.state() == MenuState::Open;

        if is_open {
            self.content = Some(target.id);
        } else {
            let _ = self
                .container
                .ok_or(Error::MissingCollaborator(Collaborator::Container))?;

            if let Some(previous) = self.content.replace(target.id) {
                shell.publish(Command::Remove(previous));
            }

            shell.publish(Command::Insert {
                surface: target.id,
                placement: Placement::Fill,
            });
            shell.invalidate_layout();
        }

        log::debug!("SideMenu: selected content {}", target.id);

        self.selected = Some(item);

        if let Some(on_select) = &mut self.on_select {
            on_select(item);
        }

        if is_open {
            self.close()?;
        }

        Ok(())
    }

    /// Processes a pan starting from the leading edge of the container.
    ///
    /// A new pan only arms while the menu is closed.
    pub fn edge_drag(&mut self, sample: Sample, shell: &mut Shell<'_>) -> Result<(), Error> {
        self.drag(Direction::Present, MenuState::Closed, sample, shell)
    }

    /// Processes a pan over the content while the menu is open.
    pub fn content_drag(&mut self, sample: Sample, shell: &mut Shell<'_>) -> Result<(), Error> {
        self.drag(Direction::Dismiss, MenuState::Open, sample, shell)
    }

    fn drag(
        &mut self,
        direction: Direction,
        armable: MenuState,
        sample: Sample,
        shell: &mut Shell<'_>,
    ) -> Result<(), Error> {
        let state = self.lifecycle.state();

        if sample.phase == Phase::Began && state != armable {
            if self.transition.is_settling() {
                log::warn!("SideMenu: ignoring {direction:?} gesture while settling");
            } else {
                log::trace!("SideMenu: ignoring {direction:?} gesture, menu is {state:?}");
            }

            return Ok(());
        }

        match self.transition.handle(direction, sample, shell) {
            Response::StartRequested(direction) => {
                self.ensure_collaborators()?;

                if self.lifecycle.begin(direction) {
                    self.report(state);
                    self.deferred.push_back(Deferred::Start {
                        direction,
                        interactive: true,
                    });
                    shell.request_redraw();
                }
            }
            Response::Discarded {
                start_requested: true,
            } => {
                let queued = self.deferred.iter().position(|work| {
                    matches!(
                        work,
                        Deferred::Start {
                            interactive: true,
                            ..
                        }
                    )
                });

                if let Some(position) = queued {
                    let _ = self.deferred.remove(position);

                    log::debug!("SideMenu: {direction:?} gesture ended before its run started");

                    let _ = self.lifecycle.revert();
                    self.report(state);
                }
            }
            Response::Settling { .. } => shell.request_redraw(),
            Response::Ignored | Response::Updated(_) | Response::Discarded { .. } => {}
        }

        Ok(())
    }

    /// Processes a tap on the given surface.
    ///
    /// Tapping the content while the menu is open closes it.
    pub fn tap(&mut self, surface: surface::Id) -> Result<(), Error> {
        if surface == self.snapshot && self.lifecycle.state() == MenuState::Open {
            self.close()
        } else {
            Ok(())
        }
    }

    /// Updates the size of the container.
    ///
    /// An open menu is closed, since its layout depends on the old size.
    pub fn resize(&mut self, size: Size) -> Result<(), Error> {
        let container = self
            .container
            .as_mut()
            .ok_or(Error::MissingCollaborator(Collaborator::Container))?;

        container.size = size;

        log::debug!(
            "SideMenu: container {} resized to {} x {}",
            container.id,
            size.width,
            size.height
        );

        match self.lifecycle.state() {
            MenuState::Open | MenuState::Opening => self.close(),
            MenuState::Closed | MenuState::Closing => Ok(()),
        }
    }

    /// Advances the side menu to `now`.
    ///
    /// Drains the requests of the [`MenuHandle`], starts deferred runs,
    /// and advances the settling animation.
    pub fn tick(&mut self, now: Instant, shell: &mut Shell<'_>) -> Result<(), Error> {
        for request in self.handle.drain() {
            match request {
                Request::Open => self.open()?,
                Request::Close => self.close()?,
                Request::Toggle => self.toggle()?,
            }
        }

        self.run_deferred(shell)?;

        if let Some(completion) = self.transition.tick(now, shell) {
            let state = self.lifecycle.state();
            let _ = self.lifecycle.finish(completion.committed);
            self.report(state);

            self.run_deferred(shell)?;
        }

        Ok(())
    }

    fn run_deferred(&mut self, shell: &mut Shell<'_>) -> Result<(), Error> {
        while !self.transition.is_running() {
            let Some(work) = self.deferred.pop_front() else {
                break;
            };

            match work {
                Deferred::Start {
                    direction,
                    interactive,
                } => self.start(direction, interactive, shell)?,
                Deferred::Open => self.open()?,
                Deferred::Close => self.close()?,
                Deferred::Select(item) => self.select_content(item, shell)?,
            }
        }

        if !self.deferred.is_empty() {
            shell.request_redraw();
        }

        Ok(())
    }

    fn start(
        &mut self,
        direction: Direction,
        interactive: bool,
        shell: &mut Shell<'_>,
    ) -> Result<(), Error> {
        let state = self.lifecycle.state();

        let stage = match Stage::resolve(
            self.container.map(|container| container.size),
            self.menu,
            self.content,
            self.snapshot,
        ) {
            Ok(stage) => stage,
            Err(error) => {
                log::warn!("SideMenu: cannot start {direction:?} run: {error}");

                let _ = self.lifecycle.revert();
                self.report(state);

                return Err(error);
            }
        };

        let started = self.transition.start(
            direction,
            interactive,
            stage,
            &self.options,
            &self.item_options,
            shell,
        );

        if !started {
            let _ = self.lifecycle.revert();
            self.report(state);
        }

        Ok(())
    }

    fn ensure_collaborators(&self) -> Result<(), Error> {
        if self.container.is_none() {
            return Err(Error::MissingCollaborator(Collaborator::Container));
        }

        if self.menu.is_none() {
            return Err(Error::MissingCollaborator(Collaborator::Menu));
        }

        Ok(())
    }

    fn report(&mut self, previous: MenuState) {
        let state = self.lifecycle.state();

        if state == previous {
            return;
        }

        log::debug!("SideMenu: {previous:?} -> {state:?}");

        if let Some(on_state_changed) = &mut self.on_state_changed {
            on_state_changed(state);
        }
    }
}

impl Default for SideMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SideMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideMenu")
            .field("state", &self.lifecycle.state())
            .field("transition", &self.transition)
            .field("container", &self.container)
            .field("menu", &self.menu)
            .field("content", &self.content)
            .field("snapshot", &self.snapshot)
            .field("selected", &self.selected)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}
