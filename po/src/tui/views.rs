//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module draws the UI
//! from AppState but never modifies it (the transient ListState for the
//! task list is rebuilt each frame from the selection index).

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::state::{AppState, ConfirmDialog, FormField, InteractionMode, TaskForm};

mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const DUE: Color = Color::Rgb(255, 215, 0); // Gold
}

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    // Create main layout: header, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_task_list(state, frame, chunks[1]);
    render_footer(state, frame, chunks[2]);

    // Render overlays
    match &state.interaction_mode {
        InteractionMode::AddTask(form) => render_add_form(form, frame, frame.area()),
        InteractionMode::Details => render_details(state, frame, frame.area()),
        InteractionMode::ConfirmDelete(dialog) => render_confirm_dialog(dialog, frame, frame.area()),
        InteractionMode::Help => render_help_overlay(frame, frame.area()),
        InteractionMode::Normal => {}
    }
}

/// Render header with title and task count
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "Personal Organizer",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
    ]);
    let right = Line::from(Span::styled(
        format!("{} tasks ", state.tasks.len()),
        Style::default().fg(colors::DIM),
    ))
    .right_aligned();

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    frame.render_widget(Paragraph::new(left), halves[0]);
    frame.render_widget(Paragraph::new(right), halves[1]);
}

/// Render the task list with the current selection highlighted
fn render_task_list(state: &AppState, frame: &mut Frame, area: Rect) {
    if state.tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one.",
            Style::default().fg(colors::DIM),
        )))
        .block(Block::default().borders(Borders::ALL).title("Tasks"));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| {
            let mut spans = vec![Span::raw(task.title.clone())];
            if task.due_date.is_some() {
                spans.push(Span::styled(
                    format!("  (due {})", task.due_date_display()),
                    Style::default().fg(colors::DUE),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(
            Style::default()
                .bg(colors::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render footer with error message or context-sensitive keybinds
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let content = if let Some(ref error) = state.error_message {
        Line::from(Span::styled(
            format!(" Error: {}", error),
            Style::default().fg(colors::ERROR),
        ))
    } else {
        let keybinds = match &state.interaction_mode {
            InteractionMode::AddTask(_) => vec![
                ("[Tab]", "Next field"),
                ("[Enter]", "Add"),
                ("[Esc]", "Cancel"),
            ],
            InteractionMode::ConfirmDelete(_) => {
                vec![("[←/→]", "Select"), ("[Enter]", "Confirm"), ("[Esc]", "Cancel")]
            }
            InteractionMode::Details | InteractionMode::Help => vec![("[Esc]", "Close")],
            InteractionMode::Normal => vec![
                ("[a]", "Add"),
                ("[Enter]", "Details"),
                ("[x]", "Delete"),
                ("[?]", "Help"),
                ("[q]", "Quit"),
            ],
        };
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in keybinds {
            spans.push(Span::styled(key, Style::default().fg(colors::KEYBIND)));
            spans.push(Span::raw(format!(" {}  ", action)));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(content).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn form_field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::DIM)
    };
    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style), Span::raw(value)];
    if focused {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

/// Render the add-task form popup
fn render_add_form(form: &TaskForm, frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 40, area);
    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(""),
        form_field_line("Title", &form.title, form.focus == FormField::Title),
        form_field_line("Description", &form.description, form.focus == FormField::Description),
        form_field_line("Due date", &form.due_date, form.focus == FormField::DueDate),
        Line::from(""),
        Line::from(Span::styled(
            "  Due date format: DD.MM.YYYY (leave empty for none)",
            Style::default().fg(colors::DIM),
        )),
    ];

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Add Task"));
    frame.render_widget(popup, popup_area);
}

/// Render the details popup for the selected task
fn render_details(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(task) = state.selected_task() else {
        return;
    };
    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);

    let date_display = if task.due_date.is_some() {
        task.due_date_display()
    } else {
        "not set".to_string()
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(" Task: ", bold), Span::raw(task.title.clone())]),
        Line::from(""),
        Line::from(vec![Span::styled(" Due date: ", bold), Span::raw(date_display)]),
        Line::from(""),
        Line::from(Span::styled(" Description:", bold)),
    ];
    for line in task.description.lines() {
        content.push(Line::from(format!("   {}", line)));
    }

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Task Details"));
    frame.render_widget(popup, popup_area);
}

/// Render the delete confirmation dialog
fn render_confirm_dialog(dialog: &ConfirmDialog, frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup_area);

    let yes_style = if dialog.selected_button {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let no_style = if !dialog.selected_button {
        Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };

    let content = vec![
        Line::from(""),
        Line::from(dialog.message.as_str()).centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled(" No ", no_style),
            Span::raw("    "),
            Span::styled(" Yes ", yes_style),
        ])
        .centered(),
    ];

    let popup = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title("Delete Task"));
    frame.render_widget(popup, popup_area);
}

fn key_line<'a>(key: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<8}", key), Style::default().fg(colors::KEYBIND)),
        Span::raw(action),
    ])
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                .fg(colors::HEADER),
        )]),
        Line::from(""),
        key_line("j/↓", "Move down"),
        key_line("k/↑", "Move up"),
        key_line("g", "Go to top"),
        key_line("G", "Go to bottom"),
        Line::from(""),
        key_line("a", "Add a task"),
        key_line("Enter/d", "Task details"),
        key_line("x/Del", "Delete task"),
        Line::from(""),
        key_line("?", "Toggle help"),
        key_line("q", "Quit (saves the list)"),
    ];

    let popup = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(popup, popup_area);
}

/// Center a popup rect within `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
