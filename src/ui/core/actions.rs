/// State transitions produced by components and executed by the
/// application: the single command table every input event maps onto.
#[derive(Debug, Clone)]
pub enum Action {
    // Note lifecycle
    NewNote,
    OpenNote(i32),
    SaveNote { id: i32, content: String, color: String },
    DeleteConfirmed(i32),
    ApplyColor { id: i32, color: String },
    ExportTo { id: i32, path: String },

    // Window management
    CloseWindow(i32),
    FocusNext,
    FocusPrev,
    ToggleList,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DeleteConfirmation { note_id: i32, preview: String },
    ColorPicker { note_id: i32, current: String },
    Export { note_id: i32 },
    Error(String),
    Info(String),
    Help,
}
