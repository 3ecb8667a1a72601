/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    SelectNext,
    SelectPrev,
    OpenSelected,
    OpenText(String),
    ShowTexts,
    Type(char),
    Backspace,
    SuggestionNext,
    SuggestionPrev,
    Accept,
    Skip,
    ToggleHardcore,
    InspectPrev,
    InspectNext,
    EnterCommand,
    SubmitCommand,
    Back,
    Help,
    Quit,
    InvalidCommand(String),
    None,
}
