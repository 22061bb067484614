//! Let content surfaces ask the side menu to open or close.
//!
//! Content does not hold a reference to the [`SideMenu`]. Instead, it keeps
//! a cloned [`MenuHandle`] and implements [`MenuCapable`] on top of it.
//! Requests are queued and drained by the side menu on its next tick.
//!
//! ```
//! use icy_side_menu_widget::handle::{MenuCapable, MenuHandle};
//!
//! struct Inbox {
//!     menu: MenuHandle,
//! }
//!
//! impl MenuCapable for Inbox {
//!     fn menu_handle(&self) -> &MenuHandle {
//!         &self.menu
//!     }
//! }
//!
//! let handle = MenuHandle::default();
//! let inbox = Inbox { menu: handle.clone() };
//!
//! inbox.request_open_menu();
//! assert!(!handle.is_empty());
//! ```
//!
//! [`SideMenu`]: crate::SideMenu
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A request sent through a [`MenuHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Open the menu.
    Open,
    /// Close the menu.
    Close,
    /// Open the menu if closed, close it otherwise.
    Toggle,
}

/// A shared queue of menu [`Request`]s.
#[derive(Debug, Clone, Default)]
pub struct MenuHandle {
    requests: Rc<RefCell<VecDeque<Request>>>,
}

impl MenuHandle {
    /// Queues a [`Request`].
    pub fn request(&self, request: Request) {
        self.requests.borrow_mut().push_back(request);
    }

    /// Returns `true` if no request is pending.
    pub fn is_empty(&self) -> bool {
        self.requests.borrow().is_empty()
    }

    /// Takes the pending requests in the order they were made.
    pub(crate) fn drain(&self) -> Vec<Request> {
        self.requests.borrow_mut().drain(..).collect()
    }
}

/// Content that can open and close the side menu hosting it.
pub trait MenuCapable {
    /// Returns the [`MenuHandle`] of the side menu.
    fn menu_handle(&self) -> &MenuHandle;

    /// Asks the side menu to open.
    fn request_open_menu(&self) {
        self.menu_handle().request(Request::Open);
    }

    /// Asks the side menu to close.
    fn request_close_menu(&self) {
        self.menu_handle().request(Request::Close);
    }
}

impl MenuCapable for MenuHandle {
    fn menu_handle(&self) -> &MenuHandle {
        self
    }
}
