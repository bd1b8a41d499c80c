use std::fmt::{self, Display, Formatter};

/// The fixed menu the interactive shell offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ListAll,
    FilterByState,
    Launch,
    Stop,
    Start,
    Reboot,
    Terminate,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ListAll,
        MenuAction::FilterByState,
        MenuAction::Launch,
        MenuAction::Stop,
        MenuAction::Start,
        MenuAction::Reboot,
        MenuAction::Terminate,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ListAll => "1. List all instances",
            MenuAction::FilterByState => "2. Filter instances by state",
            MenuAction::Launch => "3. Launch a new instance",
            MenuAction::Stop => "4. Stop instances",
            MenuAction::Start => "5. Start instances",
            MenuAction::Reboot => "6. Reboot instances",
            MenuAction::Terminate => "7. Terminate instances",
            MenuAction::Exit => "0. Exit",
        }
    }
}

impl Display for MenuAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// State of the interactive loop after one selection is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingSelection,
    Terminated,
}

/// Transition after handling one menu selection: only an explicit exit ends
/// the loop; every operation returns to the menu.
pub fn next_state(action: MenuAction) -> ShellState {
    match action {
        MenuAction::Exit => ShellState::Terminated,
        _ => ShellState::AwaitingSelection,
    }
}
