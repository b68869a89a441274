use crate::dispatch::Intent;

/// Which component receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    TaskList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task list changes, run through the dispatcher
    Dispatch(Intent),

    // Focus
    FocusInput,
    FocusTaskList,

    // App control
    Quit,
    None,
}
