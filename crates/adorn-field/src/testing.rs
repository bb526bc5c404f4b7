//! Fake host and drawable for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use adorn_core::{
    CustomStateBag, CustomStates, FieldStatus, PaddingValues, Signal, Size, StateId, StateSet,
    TextDirection, Vec2,
};
use smallvec::SmallVec;

use crate::controller::CompoundDrawablesController;
use crate::drawable::{Drawable, StatefulDrawable};
use crate::host::{FieldHost, Task, TextChange};

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) struct TestDrawable {
    size: Size,
    ripple: bool,
    pushes: RefCell<Vec<StateSet>>,
    hotspot: Cell<Option<Vec2>>,
    jumps: Cell<usize>,
}

impl TestDrawable {
    fn build(w: f32, h: f32, ripple: bool) -> Rc<Self> {
        Rc::new(Self {
            size: Size::new(w, h),
            ripple,
            pushes: RefCell::new(Vec::new()),
            hotspot: Cell::new(None),
            jumps: Cell::new(0),
        })
    }

    pub fn new(w: f32, h: f32) -> Rc<Self> {
        Self::build(w, h, false)
    }

    pub fn ripple(w: f32, h: f32) -> Rc<Self> {
        Self::build(w, h, true)
    }

    pub fn pushes(&self) -> Vec<StateSet> {
        self.pushes.borrow().clone()
    }

    pub fn last(&self) -> Option<StateSet> {
        self.pushes.borrow().last().cloned()
    }

    pub fn hotspot(&self) -> Option<Vec2> {
        self.hotspot.get()
    }

    pub fn jumps(&self) -> usize {
        self.jumps.get()
    }
}

impl Drawable for TestDrawable {
    fn intrinsic_size(&self) -> Size {
        self.size
    }

    fn on_state_change(&self, states: &[StateId]) -> bool {
        self.pushes.borrow_mut().push(states.into());
        true
    }

    fn set_hotspot(&self, local: Vec2) {
        self.hotspot.set(Some(local));
    }

    fn jump_to_current_state(&self) {
        self.jumps.set(self.jumps.get() + 1);
    }

    fn is_ripple(&self) -> bool {
        self.ripple
    }
}

/// Host with a 200x50 box and 10px padding unless told otherwise.
pub(crate) struct FakeHost {
    pub size: Cell<Size>,
    pub padding: Cell<PaddingValues>,
    pub direction: Cell<TextDirection>,
    pub enabled: Cell<bool>,
    pub focused: Cell<bool>,
    pub status: Cell<FieldStatus>,
    pub states: RefCell<CustomStateBag>,
    text: RefCell<String>,
    changes: Signal<TextChange>,
    pub obscured: Cell<bool>,
    pub selection: Cell<Option<usize>>,
    raw: RefCell<[Option<Rc<dyn Drawable>>; 4]>,
    installed: RefCell<[Option<Rc<StatefulDrawable>>; 4]>,
    pub invalidations: Cell<usize>,
    pub layout_requests: Cell<usize>,
    pub focus_requests: Cell<usize>,
    tasks: RefCell<Vec<(Duration, Task)>>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(Size::new(200.0, 50.0)),
            padding: Cell::new(PaddingValues::all(10.0)),
            direction: Cell::new(TextDirection::Ltr),
            enabled: Cell::new(true),
            focused: Cell::new(false),
            status: Cell::new(FieldStatus::NEUTRAL),
            states: RefCell::new(CustomStateBag::new()),
            text: RefCell::new(String::new()),
            changes: Signal::new(TextChange::default()),
            obscured: Cell::new(false),
            selection: Cell::new(None),
            raw: RefCell::new(Default::default()),
            installed: RefCell::new(Default::default()),
            invalidations: Cell::new(0),
            layout_requests: Cell::new(0),
            focus_requests: Cell::new(0),
            tasks: RefCell::new(Vec::new()),
        })
    }

    /// A controller wired to this host.
    pub fn controller(self: &Rc<Self>) -> CompoundDrawablesController {
        let host: Rc<dyn FieldHost> = self.clone();
        CompoundDrawablesController::new(Rc::downgrade(&host))
    }

    /// Decorations the host owns before the controller installs anything.
    pub fn set_raw(&self, drawables: [Option<Rc<dyn Drawable>>; 4]) {
        *self.raw.borrow_mut() = drawables;
    }

    pub fn installed(&self, index: usize) -> Option<Rc<StatefulDrawable>> {
        self.installed.borrow()[index].clone()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Runs the tasks queued so far (not the ones they post). Returns how
    /// many ran.
    pub fn run_tasks(&self) -> usize {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let n = tasks.len();
        for (_, task) in tasks {
            task();
        }
        n
    }

    pub fn task_delays(&self) -> Vec<Duration> {
        self.tasks.borrow().iter().map(|(d, _)| *d).collect()
    }
}

impl FieldHost for FakeHost {
    fn size(&self) -> Size {
        self.size.get()
    }

    fn padding(&self) -> PaddingValues {
        self.padding.get()
    }

    fn layout_direction(&self) -> TextDirection {
        self.direction.get()
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn is_focused(&self) -> bool {
        self.focused.get()
    }

    fn status(&self) -> FieldStatus {
        self.status.get()
    }

    fn custom_states(&self) -> SmallVec<[StateId; 8]> {
        self.states.borrow().custom_states()
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        let before = self.text.replace(text.to_string());
        self.changes.set(TextChange::new(&before, text));
    }

    fn text_changes(&self) -> Signal<TextChange> {
        self.changes.clone()
    }

    fn is_text_obscured(&self) -> bool {
        self.obscured.get()
    }

    fn set_text_obscured(&self, obscured: bool) {
        self.obscured.set(obscured);
    }

    fn set_selection(&self, index: usize) {
        self.selection.set(Some(index));
    }

    fn request_focus_from_touch(&self) -> bool {
        self.focus_requests.set(self.focus_requests.get() + 1);
        self.focused.set(true);
        true
    }

    fn compound_drawables(&self) -> [Option<Rc<dyn Drawable>>; 4] {
        self.raw.borrow().clone()
    }

    fn set_compound_drawables(&self, drawables: [Option<Rc<StatefulDrawable>>; 4]) {
        *self.raw.borrow_mut() = drawables
            .clone()
            .map(|d| d.map(|d| d.inner().clone()));
        *self.installed.borrow_mut() = drawables;
    }

    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
    }

    fn request_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }

    fn post_delayed(&self, delay: Duration, task: Task) {
        self.tasks.borrow_mut().push((delay, task));
    }

    fn debug_name(&self) -> String {
        "field".into()
    }
}

pub(crate) fn decor(d: &Rc<TestDrawable>) -> Option<Rc<dyn Drawable>> {
    Some(d.clone())
}

/// `host` plus a controller with a 20x20 decoration in the right slot.
pub(crate) fn with_right_decoration() -> (Rc<FakeHost>, CompoundDrawablesController, Rc<TestDrawable>)
{
    init_logger();
    let host = FakeHost::new();
    let controller = host.controller();
    let icon = TestDrawable::new(20.0, 20.0);
    controller.set_compound_drawables([None, None, decor(&icon), None]);
    (host, controller, icon)
}
